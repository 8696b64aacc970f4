#![allow(dead_code)]
use rooster::lang::{Lexer, TokenKind};
use rooster::mach::{Program, Runtime, Word};

pub fn exec(program: Program) -> Runtime<Vec<u8>> {
    let mut runtime = Runtime::with_output(program, Vec::new());
    if let Err(error) = runtime.run() {
        panic!("{}", error);
    }
    runtime
}

pub fn top(runtime: &Runtime<Vec<u8>>) -> Word {
    *runtime.stack().peek().expect("empty stack")
}

pub fn printed(runtime: &Runtime<Vec<u8>>) -> String {
    String::from_utf8_lossy(runtime.output()).into_owned()
}

/// Stand-in for the compiler stage: emit operand tokens in order,
/// replacing label references with the index their label carries.
pub fn assemble(source: &str) -> Program {
    let tokens: Vec<_> = Lexer::new(source).collect();
    let mut program = Program::new();
    for token in tokens.iter().filter(|t| t.kind.is_operand()) {
        let word = match token.kind {
            TokenKind::Instruction(op) => Word::from(op),
            TokenKind::Int => token.int_value().expect("int literal"),
            TokenKind::LabelName => {
                let target = tokens
                    .iter()
                    .find(|t| t.kind == TokenKind::Label && t.label() == token.label())
                    .unwrap_or_else(|| panic!("undefined label {}", token));
                target.index.expect("label index") as Word
            }
            _ => panic!("line {}: cannot assemble {}", token.line, token),
        };
        assert_eq!(program.len(), token.index.expect("operand index"));
        program.push(word);
    }
    program
}
