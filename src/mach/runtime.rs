use super::stack::Underflow;
use super::{Address, Error, Opcode, Program, Result, Stack, Word};
use std::convert::TryFrom;
use std::io::Write;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Halted,
}

/// ## Fetch-decode-execute engine
///
/// Owns the program, the instruction pointer, the operand stack and the
/// variable store. `PRINT` writes to `W`, which is stdout unless the
/// runtime was built with [`Runtime::with_output`].
pub struct Runtime<W = std::io::Stdout> {
    program: Program,
    ip: Address,
    state: State,
    stack: Stack<Word>,
    locals: Vec<Word>,
    output: W,
}

impl Runtime<std::io::Stdout> {
    pub fn new(program: impl Into<Program>) -> Runtime<std::io::Stdout> {
        Runtime::with_output(program, std::io::stdout())
    }
}

impl<W: Write> Runtime<W> {
    pub fn with_output(program: impl Into<Program>, output: W) -> Runtime<W> {
        Runtime {
            program: program.into(),
            ip: 0,
            state: State::Running,
            stack: Stack::new(),
            locals: Vec::new(),
            output,
        }
    }

    pub fn ip(&self) -> Address {
        self.ip
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub fn is_halted(&self) -> bool {
        self.state == State::Halted
    }
    pub fn stack(&self) -> &Stack<Word> {
        &self.stack
    }
    /// The variable store. Never shrinks.
    pub fn locals(&self) -> &[Word] {
        &self.locals
    }
    pub fn output(&self) -> &W {
        &self.output
    }
    pub fn into_output(self) -> W {
        self.output
    }

    /// Execute until `HALT`, until the instruction pointer leaves the
    /// program, or until an error.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == State::Running {}
        Ok(())
    }

    /// Execute a single instruction. A failed step halts the runtime.
    pub fn step(&mut self) -> Result<State> {
        if self.state == State::Halted {
            return Ok(State::Halted);
        }
        let address = self.ip;
        match self.execute(address) {
            Ok(()) => Ok(self.state),
            Err(error) => {
                warn!(%error, "runtime error");
                self.state = State::Halted;
                Err(error)
            }
        }
    }

    fn execute(&mut self, address: Address) -> Result<()> {
        let word = match self.program.get(address) {
            Some(word) => word,
            None => {
                debug!(address, "ran off the end of the program");
                self.state = State::Halted;
                return Ok(());
            }
        };
        let op = Opcode::try_from(word).map_err(|word| Error::UnknownOpcode { address, word })?;
        self.ip += 1;
        trace!(address, %op, depth = self.stack.len(), "exec");

        let underflow = |_: Underflow| Error::StackUnderflow { address };
        match op {
            Opcode::Iconst => {
                let val = self.operand(address)?;
                self.stack.push(val);
            }
            Opcode::Iadd => {
                let (a, b) = self.stack.pop_2().map_err(underflow)?;
                self.stack.push(a.wrapping_add(b));
            }
            Opcode::Isub => {
                let (a, b) = self.stack.pop_2().map_err(underflow)?;
                self.stack.push(a.wrapping_sub(b));
            }
            Opcode::Imul => {
                let (a, b) = self.stack.pop_2().map_err(underflow)?;
                self.stack.push(a.wrapping_mul(b));
            }
            Opcode::Ilt => {
                let (a, b) = self.stack.pop_2().map_err(underflow)?;
                self.stack.push((a < b) as Word);
            }
            Opcode::Ieq => {
                let (a, b) = self.stack.pop_2().map_err(underflow)?;
                self.stack.push((a == b) as Word);
            }
            Opcode::Print => {
                let val = self.stack.pop().map_err(underflow)?;
                writeln!(self.output, "{}", val)
                    .and_then(|_| self.output.flush())
                    .map_err(|source| Error::Output { address, source })?;
            }
            Opcode::Jmp => {
                let target = self.operand(address)?;
                self.ip = Self::target(address, target)?;
            }
            Opcode::Jmpt => {
                let target = self.operand(address)?;
                let cond = self.stack.pop().map_err(underflow)?;
                if cond != 0 {
                    self.ip = Self::target(address, target)?;
                }
            }
            Opcode::Jmpf => {
                let target = self.operand(address)?;
                let cond = self.stack.pop().map_err(underflow)?;
                if cond == 0 {
                    self.ip = Self::target(address, target)?;
                }
            }
            Opcode::Gstore | Opcode::Store => {
                let word = self.operand(address)?;
                let slot = Self::target(address, word)?;
                let val = self.stack.pop().map_err(underflow)?;
                if slot >= self.locals.len() {
                    let out_of_range = || Error::AddressOutOfRange {
                        address,
                        target: word,
                    };
                    let len = slot.checked_add(1).ok_or_else(out_of_range)?;
                    self.locals
                        .try_reserve(len - self.locals.len())
                        .map_err(|_| out_of_range())?;
                    self.locals.resize(len, 0);
                }
                self.locals[slot] = val;
            }
            Opcode::Gload => {
                let slot = self.operand(address)?;
                let slot = Self::target(address, slot)?;
                let val = self.locals.get(slot).copied().unwrap_or(0);
                self.stack.push(val);
            }
            Opcode::Load => {
                // Locals live on the operand stack; the frame base is 0.
                let word = self.operand(address)?;
                let slot = Self::target(address, word)?;
                let val = self
                    .stack
                    .get(slot)
                    .copied()
                    .ok_or(Error::AddressOutOfRange {
                        address,
                        target: word,
                    })?;
                self.stack.push(val);
            }
            Opcode::Halt => {
                debug!(address, "halt");
                self.state = State::Halted;
            }
        }
        Ok(())
    }

    /// Read the next program word as an operand.
    fn operand(&mut self, address: Address) -> Result<Word> {
        let word = self
            .program
            .get(self.ip)
            .ok_or(Error::TruncatedProgram { address })?;
        self.ip += 1;
        Ok(word)
    }

    fn target(address: Address, word: Word) -> Result<Address> {
        Address::try_from(word).map_err(|_| Error::AddressOutOfRange {
            address,
            target: word,
        })
    }
}

impl<W> std::fmt::Debug for Runtime<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("ip", &self.ip)
            .field("state", &self.state)
            .field("stack", &self.stack)
            .field("locals", &self.locals)
            .finish()
    }
}
