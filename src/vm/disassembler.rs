use super::byte_code::{read_u16, Instructions, Opcode};
use std::io::Write;

/// Renders an instruction stream as a human readable listing, one
/// instruction per line, prefixed with its zero-padded byte offset:
///
/// ```text
/// 0000 OpConstant 0
/// 0003 OpConstant 1
/// 0006 OpAdd
/// ```
pub struct Disassembler<T: Write> {
    writer: T,
}

impl<T: Write> Disassembler<T> {
    pub fn new(writer: T) -> Disassembler<T> {
        Disassembler { writer }
    }

    pub fn disassemble(&mut self, instructions: &Instructions) {
        let mut address = 0;

        while address < instructions.len() {
            address = self.disassemble_instruction(instructions, address);
        }
    }

    /// Write the instruction at `address` and return the address of the
    /// next one.
    pub fn disassemble_instruction(&mut self, instructions: &Instructions, address: usize) -> usize {
        self.writer
            .write_fmt(format_args!("{:04} ", address))
            .unwrap();

        let op = match Opcode::from_u8(instructions[address]) {
            Some(op) => op,
            None => {
                self.writer
                    .write_fmt(format_args!(
                        "ERROR: unknown opcode {}\n",
                        instructions[address]
                    ))
                    .unwrap();
                return address + 1;
            }
        };

        let definition = op.definition();
        self.writer
            .write_fmt(format_args!("{}", definition.name))
            .unwrap();

        let mut offset = address + 1;
        for width in definition.operand_widths {
            let operand = match width {
                2 => read_u16(&instructions[offset..]),
                width => panic!("unsupported operand width {} for {}", width, definition.name),
            };
            self.writer
                .write_fmt(format_args!(" {}", operand))
                .unwrap();
            offset += width;
        }

        self.writer.write_all("\n".as_bytes()).unwrap();
        offset
    }
}

/// Disassemble into a string, for diagnostics and test failure output.
pub fn dump(instructions: &Instructions) -> String {
    let mut buffer = Vec::new();
    Disassembler::new(&mut buffer).disassemble(instructions);
    String::from_utf8(buffer).expect("disassembly is valid utf-8")
}
