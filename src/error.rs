use crate::parser::ParseError;
use crate::permutate::PermutationError;
use std::convert::Infallible;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    PermutationError(#[from] PermutationError),

    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    Infallible(#[from] Infallible),
}
