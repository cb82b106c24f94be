use crate::compiler::frontend;
use crate::compiler::symbol_table::SymbolTable;
use crate::compiler::Compiler;
use crate::vm::value::{Value, NULL};
use crate::vm::{GLOBALS_SIZE, VM};
use crate::MONKEY_VERSION;
use rustyline::error::ReadlineError;
use rustyline::Editor;

const PROMPT: &str = ">> ";

/// The read-eval-print loop.
///
/// Each line is parsed, compiled and run on a fresh VM, but the symbol
/// table, the constant pool and the globals array survive between lines,
/// so `let` bindings from earlier inputs stay visible. Nothing is
/// persisted; even the line history is in-memory only.
pub struct Repl {
    editor: Editor<()>,
    symbols: SymbolTable,
    constants: Vec<Value>,
    globals: Vec<Value>,
}

impl Repl {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            editor: Editor::new(),
            symbols: SymbolTable::new(),
            constants: Vec::new(),
            globals: vec![NULL; GLOBALS_SIZE],
        })
    }

    // main read-eval-print loop
    pub fn run_loop(&mut self) -> anyhow::Result<()> {
        self.banner();

        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    self.editor.add_history_entry(line.as_str());
                    self.eval(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    fn banner(&self) {
        println!("MONKEY - compiler & virtual machine");
        println!("Version: {}\n", MONKEY_VERSION);
    }

    fn eval(&mut self, line: &str) {
        let program = match frontend::parse(line) {
            Ok(program) => program,
            Err(errors) => {
                Self::print_parser_errors(&errors);
                return;
            }
        };

        let mut compiler = Compiler::with_state(
            std::mem::take(&mut self.symbols),
            std::mem::take(&mut self.constants),
        );
        let compiled = compiler.compile(&program);

        let byte_code = compiler.byte_code();
        let (symbols, constants) = compiler.into_state();
        self.symbols = symbols;
        self.constants = constants;

        if let Err(error) = compiled {
            eprintln!("error during compilation: {}", error);
            return;
        }

        let mut vm = VM::with_globals(byte_code, std::mem::take(&mut self.globals));
        let result = vm.run();
        let last_popped = vm.last_popped();
        self.globals = vm.into_globals();

        match result {
            Ok(()) => println!("{}", last_popped.inspect()),
            Err(error) => eprintln!("error during execution: {}", error),
        }
    }

    fn print_parser_errors(errors: &[frontend::parser::Error]) {
        eprintln!("Woops! We ran into some monkey business here!");
        eprintln!(" parser errors:");
        for error in errors {
            eprintln!("\t{}", error);
        }
    }
}
