//! Integer → Roman numeral conversion.
//!
//! Course titles like "Calculus 2" become "Calculus II" so the number
//! survives word tokenization as a term of its own.

/// Canonical symbol table, largest value first.
const SYMBOLS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Greedy largest-value-first conversion. `0` has no symbol and yields
/// the empty string; values above 3999 repeat `M`.
pub fn to_roman(mut n: u32) -> String {
    let mut out = String::new();
    for &(value, symbol) in &SYMBOLS {
        if n == 0 {
            break;
        }
        let times = n / value;
        for _ in 0..times {
            out.push_str(symbol);
        }
        n -= value * times;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Standard subtractive-notation parser used to check the conversion.
    fn parse_roman(s: &str) -> u32 {
        let value = |c: char| match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => panic!("not a roman digit: {c}"),
        };
        let digits: Vec<u32> = s.chars().map(value).collect();
        let mut total = 0;
        for (i, d) in digits.iter().enumerate() {
            match digits.get(i + 1) {
                Some(next) if next > d => total -= *d as i64,
                _ => total += *d as i64,
            }
        }
        total as u32
    }

    #[test]
    fn known_values() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(2), "II");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(to_roman(40), "XL");
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(to_roman(3999), "MMMCMXCIX");
    }

    #[test]
    fn zero_is_empty() {
        assert_eq!(to_roman(0), "");
    }

    #[test]
    fn large_values_repeat_m() {
        assert_eq!(to_roman(5000), "MMMMM");
    }

    proptest! {
        #[test]
        fn round_trips_through_standard_parsing(n in 1u32..=3999) {
            prop_assert_eq!(parse_roman(&to_roman(n)), n);
        }

        #[test]
        fn never_more_than_three_repeats(n in 1u32..=3999) {
            let s = to_roman(n);
            for sym in ["IIII", "XXXX", "CCCC", "VV", "LL", "DD"] {
                prop_assert!(!s.contains(sym), "{} -> {}", n, s);
            }
        }
    }
}
