use std::{
    fs,
    io::{self, BufRead, Write},
};

use clap::Parser;
use pylite::{
    interpreter::{evaluator::core::Context, printer},
    parse, run_with_context,
};

/// pylite is a small Python-flavored scripting language: write statements
/// separated by `;` and it will parse, print, and evaluate them.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pylite to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed syntax tree before executing the script.
    #[arg(short, long)]
    ast: bool,

    /// The script to run, or a file path with --file. Omit it to start the
    /// interactive menu.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        menu();
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{contents}'. Perhaps this file does not exist?"
            );
            std::process::exit(1);
        })
    } else {
        contents
    };

    if let Err(e) = execute(&script, args.ast, &mut Context::new()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Parses and runs one script, printing the AST first when requested.
fn execute(script: &str, show_ast: bool, context: &mut Context) -> Result<(), Box<dyn std::error::Error>> {
    let ast = parse(script)?;

    if show_ast {
        print!("{}", printer::render(&ast));
    }

    // Drain the buffer even when evaluation fails, so a shared context
    // never carries a failed run's partial output into the next one.
    let result = run_with_context(&ast, context);
    print!("{}", context.take_output());
    result?;

    Ok(())
}

/// Runs the interactive menu loop until the user exits.
///
/// All entries share one evaluation context, so variables assigned under one
/// option stay visible to the next.
fn menu() {
    let mut context = Context::new();
    let stdin = io::stdin();

    loop {
        println!("pylite - Select an option:");
        println!("1. Arithmetic Expression (e.g., print(3 + 5 * 2))");
        println!("2. List Declaration (e.g., myList = [1, 2, 3])");
        println!("3. For Loop (e.g., for i in range(1, 5): print(i))");
        println!("4. While Loop (e.g., while x < 5: x = x + 1)");
        println!("5. If Statement (e.g., if x == 5: y = 10 else: y = 20)");
        println!("6. Simple Assignment (e.g., x = 42)");
        println!("7. General Statement (try anything that correlates with the above!)");
        println!("8. Exit");

        let Some(choice) = read_line(&stdin, "Enter choice: ") else {
            break;
        };

        let prompt = match choice.trim() {
            "1" => "Enter arithmetic expression: ",
            "2" => "Enter list declaration: ",
            "3" => "Enter for loop: ",
            "4" => "Enter while loop: ",
            "5" => "Enter if statement: ",
            "6" => "Enter simple assignment: ",
            "7" => "Enter any statement: ",
            "8" => {
                println!("Exiting.");
                break;
            },
            _ => {
                println!("Invalid choice. Please try again.\n");
                continue;
            },
        };

        let Some(script) = read_line(&stdin, prompt) else {
            break;
        };

        if let Err(e) = execute(&script, true, &mut context) {
            eprintln!("{e}");
        }

        println!();
    }
}

/// Prompts on stdout and reads one line, or returns `None` on end of input.
fn read_line(stdin: &io::Stdin, prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;

    let mut line = String::new();
    let read = stdin.lock().read_line(&mut line).ok()?;

    if read == 0 {
        return None;
    }

    Some(line.trim_end_matches(['\r', '\n']).to_owned())
}
