//! Rule-table tests for the iTIP validators.
