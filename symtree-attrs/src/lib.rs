mod error_kind;

use error_kind::ErrorKindTarget;
use proc_macro::TokenStream;
use quote::quote;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any struct with named fields, or for a unit struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use symtree_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = "unexpected end of expression",
///     labels = ["add something here"],
///     category = MalformedExpression,
/// )]
/// pub struct Foo;
/// ```
///
/// The following tags are available:
///
/// | Tag        | Description                                                                    |
/// | ---------- | ------------------------------------------------------------------------------ |
/// | `message`  | The message displayed at the top of the error when it is displayed.            |
/// | `labels`   | An iterable of label texts; the `i`th label points to the `i`th span.          |
/// | `help`     | Optional help text for the error, describing what the user can do to fix it.   |
/// | `category` | The variant of `symtree_error::Category` the error belongs to. Required.       |
///
/// `message`, `labels` and `help` accept expressions. For structs with named fields, the
/// expressions are evaluated with the members of the struct in scope (as references), so they
/// can be used in the expression. Tuple structs are not supported.
///
/// [`ErrorKind`]: https://docs.rs/symtree-error
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::symtree_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #target
        }
    }.into()
}
