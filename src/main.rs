use clap::Parser;
use scratch::runtime::{ error,
                        interpreter::{ scratch_interpreter::ScratchInterpreter,
                                       CodeManagement } };
use std::io::{ stdin, stdout, BufRead, Write };
use tracing::info;



/// The lines the interpreter has always been shown off with, run one after another against the
/// same interpreter.
const DEMO_SCRIPTS: [&str; 18] =
    [
        "1 2 + print",
        "3 4 - print",
        "5 6 * print",
        "7 8 / print",
        "9 sqrt print",
        "10 dup pstack clear",
        "11 drop pstack",
        "12 13 swap pstack clear",
        "14 15 over pstack clear",
        "16 17 18 rot pstack clear",
        "var a 19 a ! a @ print",
        "20 const b b print",
        "\" 21\" print",
        "22 /* comment */ print",
        "23 ( comment ) print",
        "24 // comment\n print",
        ": c 25 print ; c",
        "pstack"
    ];



/// Run Scratch scripts, or start an interactive session when nothing is given to run.
#[derive(Parser)]
#[command(name = "scratch", version)]
#[command(about = "A small stack language with an interpret and a compile mode")]
struct Args
{
    /// Script files to run, in order.
    files: Vec<String>,

    /// Text to run after the script files.  May be given more than once.
    #[arg(short, long = "eval")]
    eval: Vec<String>,

    /// Run the built-in demonstration lines.
    #[arg(long)]
    demo: bool,

    /// Log filter, for example `debug` or `scratch=trace`.  Logs go to stderr.
    #[arg(long, env = "SCRATCH_LOG", default_value = "warn")]
    log_level: String
}



/// Read lines from stdin and run each one.  Errors are reported and the session carries on with
/// whatever state the failed line left behind.
fn repl(interpreter: &mut ScratchInterpreter) -> error::Result<()>
{
    let input = stdin();
    let mut line = String::new();

    loop
    {
        print!("> ");
        stdout().flush()?;

        line.clear();

        if input.lock().read_line(&mut line)? == 0
        {
            println!();
            break;
        }

        if let Err(error) = interpreter.process_source("<repl>", &line)
        {
            eprintln!("Error: {}", error);
        }
    }

    Ok(())
}



fn main() -> error::Result<()>
{
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(&args.log_level)
        .with_writer(std::io::stderr)
        .init();

    let mut interpreter = ScratchInterpreter::new();

    if args.demo
    {
        info!("Running the demonstration scripts.");

        for script in DEMO_SCRIPTS
        {
            interpreter.process_source("<demo>", script)?;
        }
    }

    for file in &args.files
    {
        info!(%file, "Running script.");
        interpreter.process_source_file(file)?;
    }

    for (index, text) in args.eval.iter().enumerate()
    {
        interpreter.process_source(&format!("<eval {}>", index + 1), text)?;
    }

    if !args.demo && args.files.is_empty() && args.eval.is_empty()
    {
        repl(&mut interpreter)?;
    }

    Ok(())
}
