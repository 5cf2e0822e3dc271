//! The permutation module exposes functionality around generating
//! multiple valid variations of a given domain. Note that this
//! module is _only_ concerned with generating possible permutations
//! of a given domain — no network activity happens here.
//!
//! Every mutation strategy operates on the registrable label only
//! (e.g. `google` in `www.google.co.uk`); the original subdomain and
//! top-level domain are always re-attached around the mutated label.
//!
//! Example:
//!
//! ```
//! use lookalike::{
//!   permutate::Domain,
//!   filter::Permissive,
//! };
//!
//! let domain = Domain::new("google.com").unwrap();
//! let domain_permutations: Vec<_> = domain.all(&Permissive).collect();
//! ```

use crate::constants::{
    ASCII_LOWER, FALLBACK_COMPOUND_TLD_LABELS, HOMOGLYPHS, IDNA_FILTER_REGEX, KEYBOARD_LAYOUTS, VOWELS,
};
use crate::error::Error;
use crate::filter::Filter;

use addr::parser::DomainName;
use addr::psl::List;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Wrapper around a parsed FQDN to perform permutations against.
#[derive(Clone, Hash, Default, Debug, Serialize, Deserialize, Eq, PartialEq, Ord, PartialOrd)]
pub struct Domain {
    /// The domain FQDN to generate permutations from.
    pub fqdn: String,

    /// The subdomain portion of the FQDN, if any (e.g. `www`). Empty when absent.
    pub subdomain: String,

    /// The registrable label, excluding the TLD (e.g. `google`). This is the
    /// only part every permutation strategy mutates.
    pub domain: String,

    /// The top-level domain of the FQDN (e.g. `com`, `co.uk`).
    pub tld: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Permutation {
    pub domain: Domain,
    pub kind: PermutationKind,
}

#[derive(Clone, Copy, Serialize, Deserialize, Hash, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum PermutationKind {
    Original,
    Addition,
    Bitsquatting,
    Homoglyph,
    Hyphenation,
    Insertion,
    Omission,
    Repetition,
    Replacement,
    Subdomain,
    Transposition,
    VowelSwap,
    Various,
    Dictionary,
    TldSwap,
}

#[derive(Clone, thiserror::Error, Debug)]
pub enum PermutationError {
    #[error("invalid domain name, (expected {expected:?}, found {found:?})")]
    InvalidDomain { expected: String, found: String },
}

impl Domain {
    /// Wrap a desired FQDN into a `Domain` container. Internally splits it
    /// into subdomain, registrable label, and TLD, and validates the whole
    /// name against the syntactic form used to accept or reject candidates.
    pub fn new(fqdn: &str) -> Result<Domain, Error> {
        let normalized = fqdn.trim().trim_end_matches('.').to_lowercase();

        let parsed_domain = List.parse_domain_name(&normalized).map_err(|_| {
            PermutationError::InvalidDomain {
                expected: "valid domain name that can be parsed".to_string(),
                found: normalized.clone(),
            }
        })?;

        let root_domain = parsed_domain
            .root()
            .ok_or_else(|| PermutationError::InvalidDomain {
                expected: "valid domain name with a registrable root".to_string(),
                found: normalized.clone(),
            })?;

        let tld = parsed_domain
            .suffix()
            .to_string()
            .trim_end_matches('.')
            .to_string();

        let tld = if tld.is_empty() {
            Self::fallback_tld(root_domain).ok_or_else(|| PermutationError::InvalidDomain {
                expected: "valid domain tld".to_string(),
                found: normalized.clone(),
            })?
        } else {
            tld
        };

        let domain = root_domain
            .strip_suffix(&tld)
            .and_then(|s| s.strip_suffix('.'))
            .ok_or_else(|| PermutationError::InvalidDomain {
                expected: "registrable label separate from tld".to_string(),
                found: normalized.clone(),
            })?
            .to_string();

        if domain.is_empty() || domain.len() > 63 {
            return Err(PermutationError::InvalidDomain {
                expected: "registrable label between 1 and 63 characters".to_string(),
                found: normalized.clone(),
            }
            .into());
        }

        let subdomain = normalized
            .strip_suffix(root_domain)
            .and_then(|s| s.strip_suffix('.').or(Some(s)))
            .unwrap_or("")
            .to_string();

        if normalized.len() > 253 {
            return Err(PermutationError::InvalidDomain {
                expected: "fqdn no longer than 253 characters".to_string(),
                found: normalized,
            }
            .into());
        }

        Ok(Domain {
            fqdn: normalized,
            subdomain,
            domain,
            tld,
        })
    }

    /// Best-effort two-label TLD guess for suffixes the public-suffix oracle
    /// does not recognise, following the country-compound convention (e.g.
    /// `co.uk`, `com.au`): if the second-to-last label is a known compound
    /// label, the last two labels form the TLD.
    fn fallback_tld(root_domain: &str) -> Option<String> {
        let labels: Vec<&str> = root_domain.split('.').collect();
        if labels.len() < 2 {
            return None;
        }

        let second_to_last = labels[labels.len() - 2];
        if FALLBACK_COMPOUND_TLD_LABELS.contains(&second_to_last) && labels.len() >= 3 {
            Some(labels[labels.len() - 2..].join("."))
        } else {
            Some(labels[labels.len() - 1].to_string())
        }
    }

    /// Re-attach the (unchanged) subdomain and TLD around a mutated
    /// registrable label.
    fn reassemble(&self, mutated: &str) -> String {
        if self.subdomain.is_empty() {
            format!("{mutated}.{}", self.tld)
        } else {
            format!("{}.{mutated}.{}", self.subdomain, self.tld)
        }
    }

    /// IDNA-encode the presentation-form FQDN to its ASCII (wire) form and
    /// validate it against the syntactic form candidates must satisfy before
    /// being handed to the network layer.
    ///
    /// Rejects the case where encoding leaves the length unchanged while
    /// still altering the content — a signature of a mixed-script artifact
    /// that punycode would not otherwise flag.
    pub fn to_ascii(&self) -> Result<String, Error> {
        let ascii =
            idna::domain_to_ascii(&self.fqdn).map_err(|_| PermutationError::InvalidDomain {
                expected: "domain encodable to IDNA ASCII form".to_string(),
                found: self.fqdn.clone(),
            })?;

        if ascii.len() == self.fqdn.len() && ascii != self.fqdn {
            return Err(PermutationError::InvalidDomain {
                expected: "IDNA encoding that either round-trips or changes length".to_string(),
                found: self.fqdn.clone(),
            }
            .into());
        }

        if !IDNA_FILTER_REGEX.is_match(&ascii).unwrap_or(false) {
            return Err(PermutationError::InvalidDomain {
                expected: "domain matching the accepted syntactic form".to_string(),
                found: ascii,
            }
            .into());
        }

        Ok(ascii)
    }

    /// The candidate set always contains the original domain, tagged
    /// [`PermutationKind::Original`].
    pub fn original(&self) -> Permutation {
        Permutation {
            domain: self.clone(),
            kind: PermutationKind::Original,
        }
    }

    /// Generate any and all possible domain permutations for a given `Domain`,
    /// excluding the `Dictionary` and `TLD-swap` expanders (which require an
    /// externally supplied word/TLD list — see [`Domain::dictionary`] and
    /// [`Domain::tld_swap`]).
    pub fn all<'a>(&'a self, filter: &'a impl Filter) -> impl Iterator<Item = Permutation> + 'a {
        std::iter::once(self.original())
            .filter(move |p| filter.matches(&p.domain))
            .chain(self.addition(filter))
            .chain(self.bitsquatting(filter))
            .chain(self.homoglyph(filter))
            .chain(self.hyphenation(filter))
            .chain(self.insertion(filter))
            .chain(self.omission(filter))
            .chain(self.repetition(filter))
            .chain(self.replacement(filter))
            .chain(self.subdomain(filter))
            .chain(self.transposition(filter))
            .chain(self.vowel_swap(filter))
            .chain(self.various(filter))
    }

    /// Run every built-in strategy plus the `Dictionary` and `TLD-swap`
    /// expanders, deduplicate by normalised FQDN, and return a `Vec` with the
    /// original domain first.
    pub fn generate(
        &self,
        words: &[String],
        tlds: &[String],
        filter: &impl Filter,
    ) -> Vec<Permutation> {
        let mut seen = HashSet::new();
        let mut out = Vec::new();

        for permutation in self
            .all(filter)
            .chain(self.dictionary(words, filter))
            .chain(self.tld_swap(tlds, filter))
        {
            if seen.insert(permutation.domain.fqdn.clone()) {
                out.push(permutation);
            }
        }

        out
    }

    /// Add every ASCII lowercase character after the registrable label
    /// (e.g. `google` -> `googlea`).
    pub fn addition<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || ASCII_LOWER.iter().map(move |c| self.reassemble(&format!("{}{c}", self.domain))),
            PermutationKind::Addition,
            filter,
        )
    }

    /// Following implementation takes inspiration from the following content:
    ///
    ///  - <`https://github.com/artemdinaburg/bitsquat-script/blob/master/bitsquat.py`>
    ///  - <`http://dinaburg.org/bitsquatting.html`>
    ///
    /// For each character of the registrable label, XOR it against 8 separate
    /// masks and keep the result if it falls in a valid DNS character range,
    /// replacing the character at that position.
    pub fn bitsquatting<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let chars: Vec<char> = self.domain.chars().collect();
                let mut results = Vec::new();

                for (idx, &c) in chars.iter().enumerate() {
                    for mask_index in 0..8 {
                        let mask: u8 = 1 << mask_index;
                        let squatted_char: u8 = mask ^ (c as u8);

                        if (48..=57).contains(&squatted_char)
                            || (97..=122).contains(&squatted_char)
                            || squatted_char == 45
                        {
                            let mut mutated = chars.clone();
                            mutated[idx] = squatted_char as char;
                            results.push(self.reassemble(&mutated.into_iter().collect::<String>()));
                        }
                    }
                }

                results.into_iter()
            },
            PermutationKind::Bitsquatting,
            filter,
        )
    }

    /// Permutation method that replaces ASCII characters with visually
    /// similar Unicode homoglyphs. Applies the substitution over every
    /// window width from 1 up to the full label length, at every position,
    /// then repeats the pass a second time over the first pass's output —
    /// this catches look-alikes that only emerge once an adjacent character
    /// has already been swapped.
    pub fn homoglyph<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let pass_one = Self::homoglyph_pass(&self.domain);
                let mut seen: HashSet<String> = pass_one.iter().cloned().collect();
                let mut all = pass_one.clone();

                for candidate in &pass_one {
                    for second in Self::homoglyph_pass(candidate) {
                        if seen.insert(second.clone()) {
                            all.push(second);
                        }
                    }
                }

                all.into_iter().map(move |mutated| self.reassemble(&mutated))
            },
            PermutationKind::Homoglyph,
            filter,
        )
    }

    /// Single windowed homoglyph-substitution pass over `label`.
    fn homoglyph_pass(label: &str) -> Vec<String> {
        let chars: Vec<char> = label.chars().collect();
        let len = chars.len();
        let mut out = Vec::new();

        if len < 2 {
            return out;
        }

        for width in 1..len {
            for start in 0..=(len - width) {
                let end = start + width;
                let window = &chars[start..end];

                let options: Vec<Vec<char>> = window
                    .iter()
                    .map(|c| match HOMOGLYPHS.get(c) {
                        Some(glyphs) => glyphs.chars().collect(),
                        None => vec![*c],
                    })
                    .collect();

                if options.iter().all(|o| o.len() == 1) {
                    continue;
                }

                for combo in options.iter().multi_cartesian_product() {
                    if combo.iter().zip(window).all(|(&&g, &o)| g == o) {
                        continue;
                    }

                    let mut candidate = String::with_capacity(label.len());
                    candidate.extend(&chars[..start]);
                    for &&g in &combo {
                        candidate.push(g);
                    }
                    candidate.extend(&chars[end..]);
                    out.push(candidate);
                }
            }
        }

        out
    }

    /// Permutation method that inserts hyphens (i.e. `-`) between each
    /// character of the registrable label.
    pub fn hyphenation<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let len = self.domain.len();
                (1..len).filter_map(move |idx| {
                    if !self.domain.is_char_boundary(idx) {
                        return None;
                    }
                    let mut mutated = self.domain.clone();
                    mutated.insert(idx, '-');
                    Some(self.reassemble(&mutated))
                })
            },
            PermutationKind::Hyphenation,
            filter,
        )
    }

    /// Permutation method that inserts specific characters close to any
    /// character in the registrable label depending on keyboard layout
    /// (e.g. `q` next to `w` on a QWERTY keyboard).
    pub fn insertion<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let domain = self.domain.as_str();
                let len = domain.len();
                let mut results = Vec::new();

                for (i, c) in domain.chars().enumerate() {
                    if i == 0 || i + 1 >= len {
                        continue;
                    }

                    for layout in KEYBOARD_LAYOUTS.iter() {
                        let Some(neighbors) = layout.get(&c) else {
                            continue;
                        };

                        for neighbor in neighbors.chars() {
                            let mut before = domain[..i].to_string();
                            before.push(neighbor);
                            before.push(c);
                            before.push_str(&domain[i + c.len_utf8()..]);
                            results.push(self.reassemble(&before));

                            let mut after = domain[..i].to_string();
                            after.push(c);
                            after.push(neighbor);
                            after.push_str(&domain[i + c.len_utf8()..]);
                            results.push(self.reassemble(&after));
                        }
                    }
                }

                results.into_iter()
            },
            PermutationKind::Insertion,
            filter,
        )
    }

    /// Permutation method that selectively removes a character from the
    /// registrable label, plus the collapsed-runs form (e.g. `gooogle` ->
    /// `google`) when the label contains a repeated character run.
    pub fn omission<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let mut results = Vec::new();
                let mut seen = HashSet::new();

                for (idx, c) in self.domain.char_indices() {
                    let next = idx + c.len_utf8();
                    let mut mutated = self.domain[..idx].to_string();
                    mutated.push_str(&self.domain[next..]);
                    if seen.insert(mutated.clone()) {
                        results.push(self.reassemble(&mutated));
                    }
                }

                let collapsed = Self::collapse_runs(&self.domain);
                if collapsed != self.domain && seen.insert(collapsed.clone()) {
                    results.push(self.reassemble(&collapsed));
                }

                results.into_iter()
            },
            PermutationKind::Omission,
            filter,
        )
    }

    /// Collapse runs of the same character into a single instance, e.g.
    /// `gooogle` -> `google`.
    fn collapse_runs(label: &str) -> String {
        let mut out = String::with_capacity(label.len());
        let mut last: Option<char> = None;

        for c in label.chars() {
            if Some(c) != last {
                out.push(c);
            }
            last = Some(c);
        }

        out
    }

    /// Permutation method that repeats each alphabetic character of the
    /// registrable label in turn (e.g. `google` -> `gooogle`).
    pub fn repetition<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                self.domain.char_indices().filter_map(move |(idx, c)| {
                    if !c.is_alphabetic() {
                        return None;
                    }
                    let next = idx + c.len_utf8();
                    let mut mutated = self.domain[..next].to_string();
                    mutated.push(c);
                    mutated.push_str(&self.domain[next..]);
                    Some(self.reassemble(&mutated))
                })
            },
            PermutationKind::Repetition,
            filter,
        )
    }

    /// Permutation method similar to [`Domain::insertion`], except that it
    /// replaces a given character with another character in proximity
    /// depending on keyboard layout.
    pub fn replacement<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let domain = self.domain.as_str();
                let mut results = Vec::new();

                for (i, c) in domain.chars().enumerate() {
                    for layout in KEYBOARD_LAYOUTS.iter() {
                        let Some(neighbors) = layout.get(&c) else {
                            continue;
                        };

                        for neighbor in neighbors.chars() {
                            let mut mutated = domain[..i].to_string();
                            mutated.push(neighbor);
                            mutated.push_str(&domain[i + c.len_utf8()..]);
                            results.push(self.reassemble(&mutated));
                        }
                    }
                }

                results.into_iter()
            },
            PermutationKind::Replacement,
            filter,
        )
    }

    /// Permutation method that turns a registrable-label interior position
    /// into a subdomain boundary (e.g. `google` -> `goo.gle`).
    pub fn subdomain<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let domain = self.domain.as_str();
                let chars: Vec<char> = domain.chars().collect();
                let len = chars.len();

                (1..len.saturating_sub(3)).filter_map(move |idx| {
                    if chars[idx - 1] == '-' || chars[idx] == '-' {
                        return None;
                    }

                    let mut mutated = String::with_capacity(domain.len() + 1);
                    mutated.extend(&chars[..idx]);
                    mutated.push('.');
                    mutated.extend(&chars[idx..]);
                    Some(self.reassemble(&mutated))
                })
            },
            PermutationKind::Subdomain,
            filter,
        )
    }

    /// Permutation method that swaps each adjacent pair of distinct
    /// characters in the registrable label (e.g. `google` -> `goolge`).
    pub fn transposition<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let chars: Vec<char> = self.domain.chars().collect();
                (0..chars.len().saturating_sub(1)).filter_map(move |i| {
                    if chars[i] == chars[i + 1] {
                        return None;
                    }

                    let mut mutated = chars.clone();
                    mutated.swap(i, i + 1);
                    Some(self.reassemble(&mutated.into_iter().collect::<String>()))
                })
            },
            PermutationKind::Transposition,
            filter,
        )
    }

    /// Permutation method that swaps vowels for other vowels (e.g.
    /// `google` -> `gougle`).
    pub fn vowel_swap<'a>(
        &'a self,
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let chars: Vec<char> = self.domain.chars().collect();
                let mut results = Vec::new();

                for (idx, &c) in chars.iter().enumerate() {
                    if !VOWELS.contains(&c.to_ascii_lowercase()) {
                        continue;
                    }

                    for &vowel in VOWELS.iter() {
                        if vowel == c {
                            continue;
                        }

                        let mut mutated = chars.clone();
                        mutated[idx] = vowel;
                        results.push(self.reassemble(&mutated.into_iter().collect::<String>()));
                    }
                }

                results.into_iter()
            },
            PermutationKind::VowelSwap,
            filter,
        )
    }

    /// Four TLD-shape variants that do not fit any other strategy: folding a
    /// multi-label TLD down to its last label or its dotless concatenation,
    /// and (for single-label TLDs) doubling the TLD as a fake subdomain or
    /// swapping it onto `.com`.
    pub fn various<'a>(&'a self, filter: &'a impl Filter) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let mut results = Vec::new();
                let prefix = if self.subdomain.is_empty() {
                    String::new()
                } else {
                    format!("{}.", self.subdomain)
                };

                if self.tld.contains('.') {
                    if let Some(last_label) = self.tld.rsplit('.').next() {
                        results.push(format!("{prefix}{}.{last_label}", self.domain));
                    }
                    results.push(format!("{prefix}{}{}", self.domain, self.tld));
                } else {
                    results.push(format!(
                        "{prefix}{}{}.{}",
                        self.domain, self.tld, self.tld
                    ));

                    if self.tld != "com" {
                        results.push(format!("{prefix}{}-{}.com", self.domain, self.tld));
                    }
                }

                results.into_iter()
            },
            PermutationKind::Various,
            filter,
        )
    }

    /// Dictionary expander: prepends/appends each supplied word to the
    /// registrable label, with and without a separating dash.
    ///
    /// Unlike every other strategy, this one takes its word list from the
    /// caller — loading a dictionary file is a host-process concern, not
    /// this crate's.
    pub fn dictionary<'a>(
        &'a self,
        words: &'a [String],
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                words.iter().flat_map(move |word| {
                    vec![
                        self.reassemble(&format!("{}-{word}", self.domain)),
                        self.reassemble(&format!("{}{word}", self.domain)),
                        self.reassemble(&format!("{word}-{}", self.domain)),
                        self.reassemble(&format!("{word}{}", self.domain)),
                    ]
                    .into_iter()
                })
            },
            PermutationKind::Dictionary,
            filter,
        )
    }

    /// TLD-swap expander: replaces the TLD with each supplied candidate TLD,
    /// excluding the domain's own TLD. Like [`Domain::dictionary`], the TLD
    /// list is supplied by the caller.
    pub fn tld_swap<'a>(
        &'a self,
        tlds: &'a [String],
        filter: &'a impl Filter,
    ) -> impl Iterator<Item = Permutation> + 'a {
        Self::permutation(
            move || {
                let prefix = if self.subdomain.is_empty() {
                    String::new()
                } else {
                    format!("{}.", self.subdomain)
                };

                tlds.iter()
                    .filter(move |tld| tld.as_str() != self.tld)
                    .map(move |tld| format!("{prefix}{}.{tld}", self.domain))
            },
            PermutationKind::TldSwap,
            filter,
        )
    }

    /// Auxiliary function that wraps each permutation function in order to
    /// perform validation and filtering of results. This leaves us with a
    /// trimmed down list of permutations that are valid domains and accepted
    /// by the `Filter` passed.
    fn permutation<'a, S, T: Fn() -> S + 'a, U: Filter + 'a>(
        f: T,
        kind: PermutationKind,
        filter: &'a U,
    ) -> impl Iterator<Item = Permutation> + use<'a, S, T, U>
    where
        S: Iterator<Item = String> + 'a,
    {
        f().filter_map(move |candidate| {
            if let Ok(domain) = Domain::new(candidate.as_str()) {
                if filter.matches(&domain) {
                    return Some(Permutation { domain, kind });
                }
            }

            None
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::filter::{Permissive, Substring};

    use super::*;

    #[test]
    fn test_all_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = d.all(&Permissive).collect();

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_generate_contains_original_exactly_once() {
        let d = Domain::new("example.com").unwrap();
        let permutations = d.generate(&[], &[], &Permissive);

        let original_count = permutations
            .iter()
            .filter(|p| matches!(p.kind, PermutationKind::Original) && p.domain.fqdn == "example.com")
            .count();

        assert_eq!(original_count, 1);
    }

    #[test]
    fn test_addition_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.addition(&Permissive).collect());

        assert_eq!(permutations.len(), ASCII_LOWER.len());
        assert!(permutations.iter().all(|p| p.domain.subdomain == "www"));
    }

    #[test]
    fn test_bitsquatting_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.bitsquatting(&Permissive).collect());

        assert!(!permutations.is_empty());
        assert!(permutations
            .iter()
            .all(|p| p.domain.domain.len() == "example".len()));
    }

    #[test]
    fn test_homoglyph_mode() {
        let d = Domain::new("google.com").unwrap();
        let permutations: Vec<_> = dbg!(d.homoglyph(&Permissive).collect());

        assert!(!permutations.is_empty());
        assert!(permutations.iter().all(|p| p.domain.fqdn != "google.com"));
    }

    #[test]
    fn test_hyphenation_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.hyphenation(&Permissive).collect());

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_insertion_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.insertion(&Permissive).collect());

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_omission_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.omission(&Permissive).collect());

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_omission_collapses_runs() {
        let d = Domain::new("gooogle.com").unwrap();
        let expected = Domain::new("google.com").unwrap();

        let results: Vec<_> = d
            .omission(&Permissive)
            .filter(|p| p.domain.fqdn == expected.fqdn)
            .collect();

        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_repetition_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.repetition(&Permissive).collect());

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_replacement_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.replacement(&Permissive).collect());

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_subdomain_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.subdomain(&Permissive).collect());

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_transposition_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.transposition(&Permissive).collect());

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_vowel_swap_mode() {
        let d = Domain::new("www.example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.vowel_swap(&Permissive).collect());

        assert!(!permutations.is_empty());
    }

    #[test]
    fn test_various_multi_label_tld() {
        let d = Domain::new("bbc.co.uk").unwrap();
        let permutations: Vec<_> = dbg!(d.various(&Permissive).collect());

        assert!(permutations.iter().any(|p| p.domain.fqdn == "bbc.uk"));
        assert!(permutations.iter().any(|p| p.domain.fqdn == "bbcco.uk"));
    }

    #[test]
    fn test_various_single_label_tld() {
        let d = Domain::new("example.com").unwrap();
        let permutations: Vec<_> = dbg!(d.various(&Permissive).collect());

        assert!(permutations.iter().any(|p| p.domain.fqdn == "examplecom.com"));
        // `com` is excluded from the `-tld.com` variant since it would be a no-op.
        assert!(!permutations.iter().any(|p| p.domain.fqdn == "example-com.com"));
    }

    #[test]
    fn test_various_non_com_tld_swap_shape() {
        let d = Domain::new("example.io").unwrap();
        let permutations: Vec<_> = dbg!(d.various(&Permissive).collect());

        assert!(permutations.iter().any(|p| p.domain.fqdn == "example-io.com"));
    }

    #[test]
    fn test_dictionary_expander() {
        let d = Domain::new("example.com").unwrap();
        let words = vec!["login".to_string()];
        let permutations: Vec<_> = dbg!(d.dictionary(&words, &Permissive).collect());

        assert_eq!(permutations.len(), 4);
        assert!(permutations.iter().any(|p| p.domain.fqdn == "login-example.com"));
        assert!(permutations.iter().any(|p| p.domain.fqdn == "example-login.com"));
    }

    #[test]
    fn test_tld_swap_expander_excludes_own_tld() {
        let d = Domain::new("example.com").unwrap();
        let tlds = vec!["com".to_string(), "net".to_string(), "org".to_string()];
        let permutations: Vec<_> = dbg!(d.tld_swap(&tlds, &Permissive).collect());

        assert_eq!(permutations.len(), 2);
        assert!(permutations.iter().all(|p| p.domain.fqdn != "example.com"));
    }

    #[test]
    fn test_to_ascii_round_trips_plain_domain() {
        let domain = Domain::new("example.com").unwrap();
        assert_eq!(domain.to_ascii().unwrap(), "example.com");
    }

    #[test]
    fn test_to_ascii_encodes_homoglyph_candidate() {
        let domain = Domain::new("google.com")
            .unwrap()
            .homoglyph(&Permissive)
            .next()
            .unwrap()
            .domain;

        let ascii = domain.to_ascii().unwrap();
        assert!(ascii.contains("xn--") || ascii == domain.fqdn);
    }

    #[test]
    fn regression_test_co_uk_tld_is_valid() {
        // Ensure we do not miss two-level TLDs such as .co.uk
        let domain = Domain::new("bbc.co.uk").unwrap();

        assert_eq!(domain.tld, "co.uk");
        assert_eq!(domain.domain, "bbc");
        assert_eq!(domain.subdomain, "");
    }

    #[test]
    fn test_subdomain_is_preserved_across_mutation() {
        let domain = Domain::new("mail.example.com").unwrap();
        assert_eq!(domain.subdomain, "mail");

        for permutation in domain.addition(&Permissive) {
            assert!(permutation.domain.fqdn.starts_with("mail."));
        }
    }

    #[test]
    fn test_domains_empty_permutations_regression() {
        let domains: Vec<Domain> = vec!["ox.ac.uk", "oxford.ac.uk", "cool.co.nz"]
            .into_iter()
            .map(|fqdn| Domain::new(fqdn).unwrap())
            .collect();

        for domain in domains {
            let permutations: Vec<_> = dbg!(domain.all(&Permissive).collect());
            assert!(!permutations.is_empty());
        }
    }

    /// Regression test against <https://github.com/haveibeensquatted/twistrs/issues/102>
    #[test]
    fn test_irrelevant_tlds_not_being_generated() {
        struct InnerFilter;
        impl Filter for InnerFilter {
            type Error = ();

            fn matches(&self, domain: &Domain) -> bool {
                domain.fqdn.contains("gov")
            }
        }

        let domain = Domain::new("www.gov.uk").unwrap();
        let tlds = vec!["no".to_string()];
        let unexpected = "www.alta.no";

        let results: Vec<Permutation> = domain
            .tld_swap(&tlds, &InnerFilter)
            .filter(|p| p.domain.fqdn == unexpected)
            .collect();

        assert_eq!(results.len(), 0);
    }

    /// Tests that the `Substring` filter behaves as expected
    #[test]
    fn test_substring_default_filter() {
        let filter = Substring::new(&["gov", "uk"]);
        let domain = Domain::new("www.gov.uk").unwrap();

        assert!(domain
            .all(&filter)
            .all(|p| p.domain.fqdn.contains("gov") || p.domain.fqdn.contains("uk")));
    }
}
