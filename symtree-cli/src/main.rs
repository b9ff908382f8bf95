mod error;

use clap::Parser as _;
use error::Error;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    ffi::OsString,
    fs,
    io::{self, BufRead, IsTerminal},
    path::{Path, PathBuf},
    process::ExitCode,
};
use symtree_compute::{derivative, symbolic::optimize::Pipeline, Eval};
use symtree_parser::parser::{
    ast::Node,
    fmt::{Dot, Latex},
    parse,
    token::Interner,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Differentiate arithmetic expressions symbolically.
#[derive(clap::Parser, Debug)]
#[command(name = "symtree", version)]
struct Args {
    /// The expression to differentiate. If omitted, expressions are read one per line from stdin.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Run the optimizer pipeline over the expression and its derivative.
    #[arg(long)]
    optimized: bool,

    /// The variable to differentiate with respect to.
    #[arg(long, default_value = "x")]
    var: String,

    /// Stem of the `.dot` and `.tex` files written for a single expression.
    #[arg(long, default_value = "expression")]
    output: PathBuf,

    /// Print the indented dumps of the expression and its derivative.
    #[arg(long)]
    dump: bool,
}

/// Builds the pipeline selected by the flags: the standard one with `--optimized`, an empty
/// one otherwise.
fn pipeline(args: &Args) -> Pipeline {
    if args.optimized { Pipeline::standard() } else { Pipeline::new() }
}

/// Parses the input and runs the pipeline over it.
fn expression(input: &str, pipeline: &Pipeline, interner: &mut Interner) -> Result<Node, Error> {
    let tree = pipeline.run(parse(input, interner)?);
    debug!(nodes = tree.size(), "parsed input");
    Ok(tree)
}

/// Differentiates the tree with respect to `--var` and runs the pipeline over the result.
fn differentiate(tree: &Node, args: &Args, pipeline: &Pipeline, interner: &mut Interner) -> Result<Node, Error> {
    let derivative = pipeline.run(derivative(tree, &args.var, interner)?);
    debug!(nodes = derivative.size(), "differentiated input");
    Ok(derivative)
}

/// Prints the indented dump of the tree if `--dump` was given.
fn print_dump(tree: &Node, args: &Args) {
    if args.dump {
        print!("{}", tree.dump());
        println!();
    }
}

/// Returns `stem` with `suffix` appended to its final component.
fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Writes the Graphviz and LaTeX renderings of `tree` to `<stem>.dot` and `<stem>.tex`.
fn write_outputs(tree: &Node, stem: &Path) -> Result<(), Error> {
    let mut dot = Dot::new(tree);
    if tree.is_constant() {
        if let Ok(value) = tree.eval_default() {
            dot = dot.with_result(value);
        }
    }

    for (path, contents) in [
        (with_suffix(stem, ".dot"), dot.to_string()),
        (with_suffix(stem, ".tex"), format!("\\[\n{}\n\\]\n", tree.as_display())),
    ] {
        fs::write(&path, contents).map_err(|err| Error::Write(path.clone(), err))?;
        info!(path = %path.display(), "wrote output");
    }

    Ok(())
}

/// Processes the expression given on the command line.
///
/// The expression's outputs are written before differentiating, so they exist even when the
/// derivative cannot be computed.
fn run_expression(input: &str, args: &Args) -> Result<(), Error> {
    let pipeline = pipeline(args);
    let mut interner = Interner::new();

    let tree = expression(input, &pipeline, &mut interner)?;
    print_dump(&tree, args);
    write_outputs(&tree, &args.output)?;

    let derivative = differentiate(&tree, args, &pipeline, &mut interner)?;
    print_dump(&derivative, args);
    write_outputs(&derivative, &with_suffix(&args.output, "-derivative"))?;

    println!("{}", derivative);
    Ok(())
}

/// Processes one line of input, printing the derivative.
fn process(input: &str, args: &Args, pipeline: &Pipeline, interner: &mut Interner) -> Result<(), Error> {
    let tree = expression(input, pipeline, interner)?;
    print_dump(&tree, args);

    let derivative = differentiate(&tree, args, pipeline, interner)?;
    print_dump(&derivative, args);

    println!("{}", derivative);
    Ok(())
}

/// Processes one line of input, reporting any error to stderr.
///
/// Returns `true` if the line was processed successfully.
fn run_line(input: &str, args: &Args, interner: &mut Interner) -> bool {
    match process(input, args, &pipeline(args), interner) {
        Ok(()) => true,
        Err(err) => {
            err.report_to_stderr(input);
            false
        },
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Some(input) = &args.expression {
        // single expression from the command line
        match run_expression(input, &args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                err.report_to_stderr(input);
                ExitCode::FAILURE
            },
        }
    } else if !io::stdin().is_terminal() {
        // one expression per line from stdin
        let mut interner = Interner::new();
        let mut ok = true;
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    eprintln!("{}", err);
                    return ExitCode::FAILURE;
                },
            };
            if line.trim().is_empty() {
                continue;
            }
            ok &= run_line(&line, &args, &mut interner);
        }

        if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        };
        let mut interner = Interner::new();

        fn process_line(rl: &mut DefaultEditor, args: &Args, interner: &mut Interner) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            run_line(&input, args, interner);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &args, &mut interner) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }

        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;
    use super::*;
    use symtree_compute::symbolic::error::kind::NonConstantPower;
    use tempfile::{tempdir, TempDir};

    fn args(optimized: bool) -> Args {
        Args {
            expression: None,
            optimized,
            var: "x".to_owned(),
            output: PathBuf::from("expression"),
            dump: false,
        }
    }

    #[test]
    fn output_names() {
        let stem = Path::new("out/expression");
        assert_eq!(with_suffix(stem, ".dot"), PathBuf::from("out/expression.dot"));
        assert_eq!(with_suffix(stem, "-derivative"), PathBuf::from("out/expression-derivative"));
    }

    fn derive(source: &str, optimized: bool) -> (String, String) {
        let args = args(optimized);
        let pipeline = pipeline(&args);
        let mut interner = Interner::new();
        let tree = expression(source, &pipeline, &mut interner).unwrap();
        let derivative = differentiate(&tree, &args, &pipeline, &mut interner).unwrap();
        (tree.to_string(), derivative.to_string())
    }

    #[test]
    fn unoptimized_derivative() {
        assert_eq!(derive("x*x", false), ("x * x".to_owned(), "1 * x + x * 1".to_owned()));
    }

    #[test]
    fn optimized_tree() {
        assert_eq!(derive("--(+x)", true), ("x".to_owned(), "1".to_owned()));
    }

    #[test]
    fn errors_are_reported_per_line() {
        let mut interner = Interner::new();
        assert!(!run_line("(2+3", &args(false), &mut interner));
        assert!(run_line("2+3", &args(false), &mut interner));
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from(["symtree", "x^2", "--optimized", "--var", "y"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("x^2"));
        assert!(args.optimized);
        assert_eq!(args.var, "y");
        assert_eq!(args.output, PathBuf::from("expression"));
    }

    #[test]
    fn parses_signed_expression() {
        let args = Args::try_parse_from(["symtree", "-+-x"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("-+-x"));

        let args = Args::try_parse_from(["symtree", "--optimized", "-1*-2/--(4--5)"]).unwrap();
        assert_eq!(args.expression.as_deref(), Some("-1*-2/--(4--5)"));
        assert!(args.optimized);
    }

    /// Runs `source` with outputs written under a fresh directory, returning the directory and
    /// the result.
    fn run_in_tempdir(source: &str) -> (TempDir, Result<(), Error>) {
        let dir = tempdir().unwrap();
        let args = Args { output: dir.path().join("expression"), ..args(false) };
        let result = run_expression(source, &args);
        (dir, result)
    }

    fn read(dir: &TempDir, name: &str) -> String {
        fs::read_to_string(dir.path().join(name)).unwrap()
    }

    #[test]
    fn writes_expression_and_derivative() {
        let (dir, result) = run_in_tempdir("x*x");
        result.unwrap();

        assert_eq!(read(&dir, "expression.tex"), "\\[\nx \\cdot x\n\\]\n");
        assert_eq!(read(&dir, "expression-derivative.tex"), "\\[\n1 \\cdot x + x \\cdot 1\n\\]\n");

        let dot = read(&dir, "expression.dot");
        assert!(dot.starts_with("digraph AST {\n0 [label=\"MULTIPLICATION\""));
        assert!(!dot.contains("\"= "));
        assert!(!read(&dir, "expression-derivative.dot").contains("\"= "));
    }

    #[test]
    fn variable_free_trees_show_value() {
        let (dir, result) = run_in_tempdir("2*3");
        result.unwrap();

        assert!(read(&dir, "expression.dot").contains("\"= 6\" [shape=box];"));
        assert!(read(&dir, "expression-derivative.dot").contains("\"= 0\" [shape=box];"));
    }

    #[test]
    fn expression_written_when_derivative_fails() {
        let (dir, result) = run_in_tempdir("x^x");

        match result {
            Err(Error::Expression(err)) => assert!(err.is::<NonConstantPower>()),
            other => panic!("expected NonConstantPower, found {:?}", other),
        }
        assert!(dir.path().join("expression.dot").exists());
        assert!(dir.path().join("expression.tex").exists());
        assert!(!dir.path().join("expression-derivative.dot").exists());
    }

    #[test]
    fn nothing_written_when_parsing_fails() {
        let (dir, result) = run_in_tempdir("(2+3");

        assert!(matches!(result, Err(Error::Expression(_))));
        assert!(!dir.path().join("expression.dot").exists());
    }
}
