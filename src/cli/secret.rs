//! Random secret generation for the `SECRET` env key.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::AppError;

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
// no single quote: values are written single-quoted
const SYMBOLS: &str = "~!@#$%^&*()_+`-={}|[]\\:\"<>?,./";

/// Secret of `length` characters with exactly `digits` digits and `symbols` symbols,
/// the rest letters. No character appears twice.
pub fn generate_secret(length: usize, digits: usize, symbols: usize) -> Result<String, AppError> {
    generate_secret_with(&mut rand::thread_rng(), length, digits, symbols)
}

pub fn generate_secret_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    digits: usize,
    symbols: usize,
) -> Result<String, AppError> {
    let letters = length
        .checked_sub(digits + symbols)
        .ok_or_else(|| AppError::BadRequest("digits and symbols exceed the requested length".into()))?;
    let mut out = Vec::with_capacity(length);
    for (count, class, name) in [(letters, LETTERS, "letters"), (digits, DIGITS, "digits"), (symbols, SYMBOLS, "symbols")] {
        let pool: Vec<char> = class.chars().collect();
        if count > pool.len() {
            return Err(AppError::BadRequest(format!(
                "{} {} requested but only {} are available without repeats",
                count,
                name,
                pool.len()
            )));
        }
        out.extend(pool.choose_multiple(rng, count).copied());
    }
    out.shuffle(rng);
    Ok(out.into_iter().collect())
}
