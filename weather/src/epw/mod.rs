/// Module for scanning a file
pub(crate) mod scanner;
