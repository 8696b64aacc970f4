/// ## Stack enforced vector
///
/// The operand stack has no fixed capacity. Taking from an empty stack
/// is the only failure and is reported as [`Underflow`].

pub struct Stack<T> {
    vec: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("stack underflow")]
pub struct Underflow;

type Result<T> = std::result::Result<T, Underflow>;

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Stack<T> {
        Stack { vec: vec![] }
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    /// Element at `idx` counted from the bottom of the stack.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vec.get(idx)
    }
    pub fn as_slice(&self) -> &[T] {
        &self.vec
    }
    pub fn push(&mut self, val: T) {
        self.vec.push(val);
    }
    pub fn pop(&mut self) -> Result<T> {
        self.vec.pop().ok_or(Underflow)
    }
    pub fn peek(&self) -> Result<&T> {
        self.vec.last().ok_or(Underflow)
    }
    /// Pops two values and returns them in pop order: `(top, beneath)`.
    /// Nothing is removed unless both are present.
    pub fn pop_2(&mut self) -> Result<(T, T)> {
        if self.vec.len() < 2 {
            return Err(Underflow);
        }
        let top = self.pop()?;
        let beneath = self.pop()?;
        Ok((top, beneath))
    }
}

impl<T> std::iter::FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            vec: iter.into_iter().collect(),
        }
    }
}
