pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

use ast::Program;
use lexer::Lexer;
use parser::Parser;

/// Parse a complete program from source text, collecting all parse errors.
pub fn parse(source: &str) -> Result<Program, Vec<parser::Error>> {
    let program = Parser::new(Lexer::new(source)).parse_program()?;
    log::trace!("parsed {} statements", program.statements.len());
    Ok(program)
}
