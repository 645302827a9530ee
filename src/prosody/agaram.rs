//! Agaram swap
//!
//! Unicode writes a consonant with its inherent "a" as the bare consonant codepoint
//! (க), and the vowel-less consonant as consonant + virama (க்). The grammar wants the
//! opposite convention, so that "consonant + sign" is always a syllable and a lone
//! consonant is always a mei. [`normalize`] swaps the two spellings in one
//! left-to-right pass:
//!
//! - a consonant not followed by any vowel sign gains a virama (க → க்)
//! - a consonant followed by a virama that is not itself followed by a vowel sign
//!   loses it (க் → க)
//!
//! Everything else is copied. The swap is its own inverse, which is how matched
//! syllables get back to original orthography.
//!
//! ```text
//! normalize("கல்வி") == "க்லவி"
//! normalize("க்லவி") == "கல்வி"
//! ```

use super::alphabet::{classify, VIRAMA};

/// Swap the agaram convention of `source`
pub fn normalize(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut output = String::with_capacity(source.len() + source.len() / 2);
    let is_sign = |i: usize| chars.get(i).is_some_and(|c| classify(*c).is_vowel_sign());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if classify(c).is_consonant() {
            if !is_sign(i + 1) {
                output.push(c);
                output.push(VIRAMA);
                i += 1;
                continue;
            }
            if chars[i + 1] == VIRAMA && !is_sign(i + 2) {
                output.push(c);
                i += 2;
                continue;
            }
        }
        output.push(c);
        i += 1;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_kalvi() {
        assert_eq!(normalize("கல்வி"), "க்லவி");
        assert_eq!(normalize("க்லவி"), "கல்வி");
    }

    #[test]
    fn test_bare_consonant_gains_virama() {
        assert_eq!(normalize("க"), "க்");
        assert_eq!(normalize("கட"), "க்ட்");
    }

    #[test]
    fn test_consonant_with_sign_is_kept() {
        assert_eq!(normalize("கா"), "கா");
        assert_eq!(normalize("கு"), "கு");
    }

    #[test]
    fn test_non_tamil_passes_through() {
        assert_eq!(normalize("abc 123, ?"), "abc 123, ?");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_vowels_and_aytham_pass_through() {
        assert_eq!(normalize("அஃஆ"), "அஃஆ");
    }

    #[test]
    fn test_virama_before_sign_is_left_alone() {
        // Malformed: two signs in a row. Left untouched so the swap stays involutive.
        assert_eq!(normalize("க்ி"), "க்ி");
        assert_eq!(normalize(&normalize("க்்")), "க்்");
    }

    #[test]
    fn test_involution_on_verse() {
        let verse = "அகர முதல எழுத்தெல்லாம் ஆதி\nபகவன் முதற்றே உலகு";
        assert_ne!(normalize(verse), verse);
        assert_eq!(normalize(&normalize(verse)), verse);
    }
}
