//! A context-triggered piecewise hash (CTPH), in the spirit of ssdeep,
//! used to score how similar the content served by a look-alike candidate
//! is to the content served by the original domain.
//!
//! No published crate implements CTPH/ssdeep comparison, so this is a
//! from-scratch but conventional implementation: a rolling checksum marks
//! block boundaries, and a per-block FNV accumulator produces one base64
//! character per block. Two signatures are compared with a Levenshtein
//! distance scaled into a 0-100 similarity score, the same shape ssdeep
//! itself reports.

const MIN_BLOCKSIZE: u32 = 3;
const SPAMSUM_LENGTH: usize = 64;
const B64: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Rolling checksum over a 7-byte window, modeled on the one used by rsync
/// and ssdeep alike.
struct RollingHash {
    window: [u8; 7],
    pos: usize,
    h1: u32,
    h2: u32,
    h3: u32,
}

impl RollingHash {
    fn new() -> Self {
        Self {
            window: [0; 7],
            pos: 0,
            h1: 0,
            h2: 0,
            h3: 0,
        }
    }

    fn update(&mut self, byte: u8) -> u32 {
        let out = self.window[self.pos];
        self.h2 = self.h2.wrapping_sub(self.h1);
        self.h2 = self
            .h2
            .wrapping_add(self.window.len() as u32 * u32::from(byte));
        self.h1 = self.h1.wrapping_add(u32::from(byte));
        self.h1 = self.h1.wrapping_sub(u32::from(out));

        self.window[self.pos] = byte;
        self.pos = (self.pos + 1) % self.window.len();

        self.h3 = (self.h3 << 5) ^ u32::from(byte);
        self.h1.wrapping_add(self.h2).wrapping_add(self.h3)
    }
}

/// Per-block FNV-1a accumulator, reset every time a block boundary fires.
struct BlockHash(u32);

impl BlockHash {
    fn new() -> Self {
        Self(0x2815_1ab3)
    }

    fn update(&mut self, byte: u8) {
        self.0 = self.0.wrapping_mul(0x0100_0193);
        self.0 ^= u32::from(byte);
    }

    fn finish(&self) -> u8 {
        B64[(self.0 as usize) % B64.len()]
    }
}

/// Compute the fuzzy hash signature of `data`, formatted as
/// `blocksize:signature_at_blocksize:signature_at_2x_blocksize`.
pub fn hash(data: &[u8]) -> String {
    let mut blocksize = MIN_BLOCKSIZE;
    while (blocksize as u64) * (SPAMSUM_LENGTH as u64) < data.len() as u64 {
        blocksize *= 2;
    }

    loop {
        let (sig1, sig2) = piecewise_signatures(data, blocksize);
        if sig1.len() < SPAMSUM_LENGTH / 2 && blocksize > MIN_BLOCKSIZE {
            blocksize /= 2;
            continue;
        }
        return format!("{blocksize}:{sig1}:{sig2}");
    }
}

fn piecewise_signatures(data: &[u8], blocksize: u32) -> (String, String) {
    (
        piecewise_signature(data, blocksize),
        piecewise_signature(data, blocksize * 2),
    )
}

fn piecewise_signature(data: &[u8], blocksize: u32) -> String {
    let mut rolling = RollingHash::new();
    let mut block = BlockHash::new();
    let mut out = String::new();

    for &byte in data {
        block.update(byte);
        let roll = rolling.update(byte);

        if roll % blocksize == blocksize - 1 {
            out.push(block.finish() as char);
            block = BlockHash::new();

            if out.len() >= SPAMSUM_LENGTH {
                break;
            }
        }
    }

    if !data.is_empty() {
        out.push(block.finish() as char);
    }

    out
}

/// Compare two fuzzy-hash signatures and return a similarity score in
/// `0..=100`, or `0` when the signatures were computed at incompatible
/// block sizes (ssdeep itself treats those as incomparable).
pub fn compare(a: &str, b: &str) -> u8 {
    let (Some(a_block), Some(a_sigs)) = split_signature(a) else {
        return 0;
    };
    let (Some(b_block), Some(b_sigs)) = split_signature(b) else {
        return 0;
    };

    if a_block != b_block {
        return 0;
    }

    let distance = levenshtein(a_sigs.0, b_sigs.0).min(levenshtein(a_sigs.1, b_sigs.1));
    let longest = a_sigs.0.len().max(b_sigs.0.len()).max(1);

    let similarity = 100usize.saturating_sub((distance * 100) / longest);
    u8::try_from(similarity).unwrap_or(100)
}

#[allow(clippy::type_complexity)]
fn split_signature(sig: &str) -> (Option<u32>, Option<(&str, &str)>) {
    let mut parts = sig.splitn(3, ':');
    let blocksize = parts.next().and_then(|s| s.parse::<u32>().ok());
    let first = parts.next();
    let second = parts.next();

    match (first, second) {
        (Some(a), Some(b)) => (blocksize, Some((a, b))),
        _ => (blocksize, None),
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let mut row: Vec<usize> = (0..=b.len()).collect();

    for i in 1..=a.len() {
        let mut prev = row[0];
        row[0] = i;

        for j in 1..=b.len() {
            let tmp = row[j];
            row[j] = if a[i - 1] == b[j - 1] {
                prev
            } else {
                1 + prev.min(row[j]).min(row[j - 1])
            };
            prev = tmp;
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_content_scores_100() {
        let data = b"the quick brown fox jumps over the lazy dog".repeat(4);
        let sig = hash(&data);

        assert_eq!(compare(&sig, &sig), 100);
    }

    #[test]
    fn test_unrelated_content_scores_low() {
        let a = hash(&b"alpha beta gamma delta epsilon zeta eta theta".repeat(8));
        let b = hash(&[7u8; 400]);

        assert!(compare(&a, &b) < 50);
    }

    #[test]
    fn test_mismatched_blocksize_scores_zero() {
        assert_eq!(compare("3:abc:def", "6:abc:def"), 0);
    }

    #[test]
    fn test_levenshtein_basic() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }
}
