// Parsing of the CC-CEDICT format (https://cc-cedict.org/wiki/)
//
// One entry per line:
//   traditional simplified [pin1 yin1] /definition 1/definition 2/.../
//
// Lines starting with '#' are comments. A line that does not match the
// entry grammar is skipped, never treated as a fatal error: the upstream
// file carries the license block and occasional malformed records inline.

pub mod lexicon;
pub mod parser;
pub mod tone;
