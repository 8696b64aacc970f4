use super::*;

mod program_test;
mod stack_test;

fn run(program: Program) -> (Runtime<Vec<u8>>, Result<()>) {
    let mut runtime = Runtime::with_output(program, Vec::new());
    let result = runtime.run();
    (runtime, result)
}
