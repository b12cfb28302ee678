pub mod compiler;

pub use compiler::{ByteStream, CompileError, Compiler, InMemoryCompiler};
