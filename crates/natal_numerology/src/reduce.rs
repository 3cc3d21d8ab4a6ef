//! Digit reduction with master-number halting.

/// Master numbers: reduction stops on reaching any of these.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Karmic debt numbers, recognized anywhere in a reduction chain.
pub const KARMIC_DEBT_NUMBERS: [u32; 4] = [13, 14, 16, 19];

pub const fn is_master(n: u32) -> bool {
    matches!(n, 11 | 22 | 33)
}

pub const fn is_karmic_debt(n: u32) -> bool {
    matches!(n, 13 | 14 | 16 | 19)
}

/// Sum of decimal digits.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce to a single digit unless a master number is met first.
///
/// Result is in {0..=9, 11, 22, 33}; only `reduce(0)` yields 0.
pub const fn reduce(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Every value visited by [`reduce`], starting with `n` itself.
pub fn reduction_chain(n: u32) -> Vec<u32> {
    let mut chain = vec![n];
    let mut current = n;
    while current > 9 && !is_master(current) {
        current = digit_sum(current);
        chain.push(current);
    }
    chain
}
