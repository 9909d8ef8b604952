//! Input patterns for exercising the sorter, as variant vectors.
//!
//! All randomness flows through one process-wide seed so failing runs can
//! be reproduced; the test harness prints the seed before first use.

use std::sync::atomic::{AtomicBool, Ordering};

use rand::prelude::*;

use once_cell::sync::OnceCell;

use crate::value::Variant;

// --- Public ---

pub fn random(size: usize) -> Vec<Variant> {
    //     .
    // : . : :
    // :.:::.::

    to_variants(random_ints(size))
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<Variant>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    to_variants(random_uniform_ints(size, range))
}

pub fn all_equal(size: usize) -> Vec<Variant> {
    // ......
    // ::::::

    (0..size).map(|_| Variant::I32(66)).collect()
}

pub fn ascending(size: usize) -> Vec<Variant> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).map(Variant::I32).collect()
}

pub fn descending(size: usize) -> Vec<Variant> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().map(Variant::I32).collect()
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<Variant> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_ints(size);
    let chunks_size = size / saw_count.max(1);
    let saw_directions = random_uniform_ints((size / chunks_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunks_size).enumerate() {
        if saw_directions[i] == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    to_variants(vals)
}

pub fn pipe_organ(size: usize) -> Vec<Variant> {
    //   .:.
    // .:::::.

    let mut vals = random_ints(size);

    let first_half = &mut vals[0..(size / 2)];
    first_half.sort_unstable();

    let second_half = &mut vals[(size / 2)..size];
    second_half.sort_unstable_by_key(|&e| std::cmp::Reverse(e));

    to_variants(vals)
}

/// Fixed-width decimal strings, so lexicographic and numeric order agree.
pub fn random_strings(size: usize) -> Vec<Variant> {
    random_ints(size)
        .into_iter()
        .map(|val| Variant::Str(format!("{:010}", val.saturating_abs())))
        .collect()
}

/// Random numeric values landing in a random kind per slot. Sorting these
/// has to move whole tagged values around, not just a payload field.
pub fn random_mixed(size: usize) -> Vec<Variant> {
    let kinds = random_uniform_ints(size, 0..=2);

    random_ints(size)
        .into_iter()
        .zip(kinds)
        .map(|(val, kind)| match kind {
            0 => Variant::I32(val),
            1 => Variant::I64(val as i64),
            _ => Variant::F64(val as f64),
        })
        .collect()
}

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| -> u64 { thread_rng().gen() })
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

fn seeded_rng() -> StdRng {
    // Random seed, but announced by the harness for repeatability.
    StdRng::seed_from_u64(random_init_seed())
}

fn random_ints(size: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}

fn random_uniform_ints<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    let mut rng = seeded_rng();

    // Abstracting over ranges in Rust :(
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

fn to_variants(vals: Vec<i32>) -> Vec<Variant> {
    vals.into_iter().map(Variant::I32).collect()
}
