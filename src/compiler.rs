pub mod error;
pub mod frontend;
pub mod symbol_table;

use crate::vm::byte_code::{self, Instructions, Opcode};
use crate::vm::value::Value;
use error::Error;
use frontend::ast::{BlockStatement, Expression, Program, Statement};
use symbol_table::SymbolTable;

pub type Result<T> = std::result::Result<T, Error>;

// patched before compilation of the enclosing conditional completes
const PLACEHOLDER_JUMP_TARGET: usize = 9999;

/// A snapshot of the compiler's output, ready to run on the VM.
#[derive(Debug, Clone)]
pub struct ByteCode {
    pub instructions: Instructions,
    pub constants: Vec<Value>,
}

#[derive(Debug, Clone, Copy)]
struct EmittedInstruction {
    opcode: Opcode,
    position: usize,
}

/// Translates an AST into byte code in a single pass.
///
/// Instructions are appended to a growing buffer while literals accumulate
/// in the constant pool. Forward jumps are emitted with a placeholder
/// operand and patched in place once their target address is known, so no
/// second pass is needed. Compilation does not reset state between calls;
/// a REPL keeps the symbol table and constant pool alive across lines via
/// `with_state` / `into_state`.
pub struct Compiler {
    instructions: Instructions,
    constants: Vec<Value>,
    symbols: SymbolTable,

    last_instruction: Option<EmittedInstruction>,
    previous_instruction: Option<EmittedInstruction>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::with_state(SymbolTable::new(), Vec::new())
    }

    /// Continue compiling against state carried over from a previous
    /// compilation, so identifiers and constant indices stay stable.
    pub fn with_state(symbols: SymbolTable, constants: Vec<Value>) -> Self {
        Compiler {
            instructions: Vec::new(),
            constants,
            symbols,
            last_instruction: None,
            previous_instruction: None,
        }
    }

    pub fn compile(&mut self, program: &Program) -> Result<()> {
        for statement in &program.statements {
            self.compile_statement(statement)?;
        }

        log::trace!(
            "compiled {} bytes of instructions, {} constants",
            self.instructions.len(),
            self.constants.len()
        );
        Ok(())
    }

    pub fn byte_code(&self) -> ByteCode {
        ByteCode {
            instructions: self.instructions.clone(),
            constants: self.constants.clone(),
        }
    }

    /// Hand the persistent state back to the caller for the next line.
    pub fn into_state(self) -> (SymbolTable, Vec<Value>) {
        (self.symbols, self.constants)
    }

    fn compile_statement(&mut self, statement: &Statement) -> Result<()> {
        match statement {
            Statement::Expression(expression) => {
                self.compile_expression(expression)?;
                // keep statements stack neutral
                self.emit(Opcode::Pop, &[]);
            }
            Statement::Let { name, value } => {
                self.compile_expression(value)?;
                let index = self.symbols.define(name).index;
                self.emit(Opcode::SetGlobal, &[index]);
            }
        }
        Ok(())
    }

    fn compile_block(&mut self, block: &BlockStatement) -> Result<()> {
        for statement in &block.statements {
            self.compile_statement(statement)?;
        }
        Ok(())
    }

    fn compile_expression(&mut self, expression: &Expression) -> Result<()> {
        match expression {
            Expression::IntegerLiteral(value) => {
                let constant = self.add_constant(Value::Integer(*value));
                self.emit(Opcode::Constant, &[constant]);
            }
            Expression::Boolean(true) => {
                self.emit(Opcode::True, &[]);
            }
            Expression::Boolean(false) => {
                self.emit(Opcode::False, &[]);
            }
            Expression::Identifier(name) => match self.symbols.resolve(name) {
                Some(symbol) => {
                    let index = symbol.index;
                    self.emit(Opcode::GetGlobal, &[index]);
                }
                None => return Err(Error::UndefinedVariable(name.clone())),
            },
            Expression::Prefix { operator, right } => {
                self.compile_expression(right)?;

                match operator.as_str() {
                    "!" => self.emit(Opcode::Bang, &[]),
                    "-" => self.emit(Opcode::Minus, &[]),
                    other => return Err(Error::UnknownOperator(other.to_string())),
                };
            }
            Expression::Infix {
                operator,
                left,
                right,
            } => self.compile_infix_expression(operator, left, right)?,
            Expression::If {
                condition,
                consequence,
                alternative,
            } => self.compile_conditional(condition, consequence, alternative.as_ref())?,
        }
        Ok(())
    }

    fn compile_infix_expression(
        &mut self,
        operator: &str,
        left: &Expression,
        right: &Expression,
    ) -> Result<()> {
        // there is no less-than opcode: `a < b` compiles as `b > a`
        if operator == "<" {
            self.compile_expression(right)?;
            self.compile_expression(left)?;
            self.emit(Opcode::GreaterThan, &[]);
            return Ok(());
        }

        self.compile_expression(left)?;
        self.compile_expression(right)?;

        match operator {
            "+" => self.emit(Opcode::Add, &[]),
            "-" => self.emit(Opcode::Sub, &[]),
            "*" => self.emit(Opcode::Mul, &[]),
            "/" => self.emit(Opcode::Div, &[]),
            ">" => self.emit(Opcode::GreaterThan, &[]),
            "==" => self.emit(Opcode::Equal, &[]),
            "!=" => self.emit(Opcode::NotEqual, &[]),
            other => return Err(Error::UnknownOperator(other.to_string())),
        };
        Ok(())
    }

    /// A conditional always leaves exactly one value on the stack: the last
    /// expression of the branch that ran, or a synthesized null when the
    /// alternative is absent. Branches are blocks, so their last expression
    /// statement ends in an `OpPop` that has to be stripped again.
    fn compile_conditional(
        &mut self,
        condition: &Expression,
        consequence: &BlockStatement,
        alternative: Option<&BlockStatement>,
    ) -> Result<()> {
        self.compile_expression(condition)?;
        let jump_not_truthy = self.emit(Opcode::JumpNotTruthy, &[PLACEHOLDER_JUMP_TARGET]);

        self.compile_block(consequence)?;
        if self.last_instruction_is(Opcode::Pop) {
            self.remove_last_pop();
        }

        let jump = self.emit(Opcode::Jump, &[PLACEHOLDER_JUMP_TARGET]);
        self.change_operand(jump_not_truthy, self.instructions.len());

        match alternative {
            None => {
                self.emit(Opcode::Null, &[]);
            }
            Some(alternative) => {
                self.compile_block(alternative)?;
                if self.last_instruction_is(Opcode::Pop) {
                    self.remove_last_pop();
                }
            }
        }

        self.change_operand(jump, self.instructions.len());
        Ok(())
    }

    fn emit(&mut self, op: Opcode, operands: &[usize]) -> usize {
        let position = self.instructions.len();
        self.instructions.extend(byte_code::make(op, operands));

        self.previous_instruction = self.last_instruction;
        self.last_instruction = Some(EmittedInstruction {
            opcode: op,
            position,
        });

        position
    }

    fn add_constant(&mut self, value: Value) -> usize {
        self.constants.push(value);
        self.constants.len() - 1
    }

    fn last_instruction_is(&self, op: Opcode) -> bool {
        matches!(self.last_instruction, Some(emitted) if emitted.opcode == op)
    }

    fn remove_last_pop(&mut self) {
        if let Some(last) = self.last_instruction {
            self.instructions.truncate(last.position);
            self.last_instruction = self.previous_instruction;
            self.previous_instruction = None;
        }
    }

    /// Back-patch the operand of the jump emitted at `position`. The new
    /// instruction is assembled with the regular encoder, so patching can
    /// never disagree with the wire format.
    fn change_operand(&mut self, position: usize, operand: usize) {
        let op = Opcode::from_u8(self.instructions[position])
            .expect("patch position does not hold an instruction");
        let instruction = byte_code::make(op, &[operand]);

        self.replace_instruction(position, &instruction);
    }

    fn replace_instruction(&mut self, position: usize, instruction: &[u8]) {
        self.instructions[position..position + instruction.len()].copy_from_slice(instruction);
    }
}
