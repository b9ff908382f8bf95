use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    Attribute,
    Expr,
    Fields,
    Ident,
    ItemStruct,
    Result,
    Token,
};

/// The arguments that can be passed to the `error` attribute.
#[derive(Debug, Default)]
pub struct ErrorArgs {
    pub message: Option<Expr>,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
    pub category: Option<Ident>,
}

impl ErrorArgs {
    /// Parse the next argument in the input stream and applies it to itself.
    fn parse_arg(&mut self, input: ParseStream) -> Result<()> {
        let ident: Ident = input.parse()?;
        input.parse::<Token![=]>()?;

        let ident_str = ident.to_string();
        match ident_str.as_str() {
            "message" => self.message = Some(input.parse()?),
            "labels" => self.labels = Some(input.parse()?),
            "help" => self.help = Some(input.parse()?),
            "category" => self.category = Some(input.parse()?),
            _ => return Err(syn::Error::new_spanned(ident, format!("unknown tag `{}`", ident_str))),
        }

        Ok(())
    }
}

impl Parse for ErrorArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = ErrorArgs::default();

        while !input.is_empty() {
            args.parse_arg(input)?;
            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        Ok(args)
    }
}

/// Creates a `let` expression that destructures `self` into its named fields. Returns a compile
/// error for tuple structs.
fn destructure_fields(ident: &Ident, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(fields) => {
            let fields = fields.named.iter().map(|field| {
                let field_name = field.ident.as_ref();
                quote! { #field_name }
            });
            quote! { let #ident { #(#fields),* } = self; }
        },
        Fields::Unnamed(_) => quote_spanned! { ident.span() => compile_error!("`ErrorKind` cannot be derived for tuple structs"); },
        Fields::Unit => quote! {},
    }
}

/// The target struct to derive [`ErrorKind`] for.
#[derive(Debug)]
pub struct ErrorKindTarget {
    pub name: Ident,
    pub fields: Fields,
    pub error_args: ErrorArgs,
}

impl Parse for ErrorKindTarget {
    fn parse(input: ParseStream) -> Result<Self> {
        let item = input.parse::<ItemStruct>()?;
        let error_args = parse_error_attr(&item.attrs)?;

        if error_args.message.is_none() {
            return Err(syn::Error::new_spanned(&item.ident, "missing `message` tag in `error` attribute"));
        }
        if error_args.category.is_none() {
            return Err(syn::Error::new_spanned(&item.ident, "missing `category` tag in `error` attribute"));
        }

        Ok(ErrorKindTarget {
            name: item.ident,
            fields: item.fields,
            error_args,
        })
    }
}

/// Finds the `error` attribute among the struct's outer attributes and parses its tags.
fn parse_error_attr(attrs: &[Attribute]) -> Result<ErrorArgs> {
    attrs.iter()
        .find(|attr| attr.path().is_ident("error"))
        .map(|attr| attr.parse_args::<ErrorArgs>())
        .unwrap_or_else(|| Ok(ErrorArgs::default()))
}

impl ToTokens for ErrorKindTarget {
    fn to_tokens(&self, tokens: &mut TokenStream2) {
        let destructure_expr = destructure_fields(&self.name, &self.fields);
        let message = self.error_args.message.as_ref();
        let category = self.error_args.category.as_ref();
        let labels = self.error_args.labels.as_ref().map(|labels| quote! {
            let builder = builder.with_labels(
                (#labels)
                    .into_iter()
                    .enumerate()
                    .map(|(i, label_str)| {
                        let span = spans.get(i).cloned().unwrap_or(start..start);
                        let label = ::ariadne::Label::new((src_id, span))
                            .with_color(::symtree_error::EXPR);

                        if label_str.is_empty() {
                            label
                        } else {
                            label.with_message(label_str)
                        }
                    })
                    .collect::<Vec<_>>()
            );
        });
        let help = self.error_args.help.as_ref().map(|e| quote! { builder.set_help(#e); });

        tokens.extend(quote! {
            fn category(&self) -> ::symtree_error::Category {
                ::symtree_error::Category::#category
            }

            fn build_report<'a>(
                &self,
                src_id: &'a str,
                spans: &[::std::ops::Range<usize>],
            ) -> ::ariadne::Report<(&'a str, ::std::ops::Range<usize>)> {
                #[allow(unused_variables)]
                #destructure_expr

                let start = spans.first().map(|span| span.start).unwrap_or(0);
                let builder = ::ariadne::Report::build(::ariadne::ReportKind::Error, src_id, start)
                    .with_message(#message);
                #labels

                #[allow(unused_mut)]
                let mut builder = builder;
                #help
                builder.finish()
            }
        });
    }
}
