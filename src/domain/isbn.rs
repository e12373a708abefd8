use rand::Rng;

/// Bookland接頭辞（978）
pub const BOOKLAND_PREFIX: [u8; 3] = [9, 7, 8];

/// ISBN-13の桁数
pub const ISBN13_LEN: usize = 13;

/// 純粋関数：ISBN-13のチェックディジットを計算する
///
/// 0始まりで偶数番目の桁は重み1、奇数番目の桁は重み3で加算し、
/// `(10 - (合計 mod 10)) mod 10` を返す。
pub fn check_digit(digits: &[u8; 12]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d as u32 } else { d as u32 * 3 })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

/// ランダムなISBN-13を生成する
///
/// 先頭3桁は978固定、続く9桁は[0, 9]の一様乱数、最後にチェックディジット。
/// グローバルな一意性は保証しない（呼び出し側でRecord Storeに照会すること）。
pub fn generate_isbn13<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits = [0u8; 12];
    digits[..3].copy_from_slice(&BOOKLAND_PREFIX);
    for digit in digits.iter_mut().skip(3) {
        *digit = rng.gen_range(0..10);
    }

    let check = check_digit(&digits);

    let mut isbn = String::with_capacity(ISBN13_LEN);
    for d in digits.iter().chain(std::iter::once(&check)) {
        isbn.push(char::from(b'0' + d));
    }
    isbn
}

/// 13桁の数字列で、チェックディジットが正しいかを判定する
pub fn is_valid_isbn13(isbn: &str) -> bool {
    if isbn.len() != ISBN13_LEN || !isbn.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let bytes = isbn.as_bytes();
    let mut digits = [0u8; 12];
    for (slot, b) in digits.iter_mut().zip(bytes) {
        *slot = b - b'0';
    }

    check_digit(&digits) == bytes[12] - b'0'
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn digits_of(s: &str) -> Vec<u32> {
        s.chars().map(|c| c.to_digit(10).unwrap()).collect()
    }

    #[test]
    fn test_check_digit_known_isbn() {
        // 978-0-306-40615-7
        let digits = [9, 7, 8, 0, 3, 0, 6, 4, 0, 6, 1, 5];
        assert_eq!(check_digit(&digits), 7);
    }

    #[test]
    fn test_check_digit_wraps_to_zero() {
        let digits = [9, 7, 8, 1, 0, 0, 0, 0, 0, 0, 0, 0];
        // 9 + 21 + 8 + 3 = 41 -> 10 - 1 = 9
        assert_eq!(check_digit(&digits), 9);

        let digits = [9, 7, 8, 0, 0, 0, 0, 0, 0, 0, 2, 0];
        // 9 + 21 + 8 + 2 = 40 -> 0
        assert_eq!(check_digit(&digits), 0);
    }

    #[test]
    fn test_generated_isbn_has_bookland_prefix_and_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let isbn = generate_isbn13(&mut rng);
            assert_eq!(isbn.len(), 13);
            assert!(isbn.starts_with("978"));
            assert!(isbn.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generated_isbn_satisfies_weighted_sum() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let isbn = generate_isbn13(&mut rng);
            let digits = digits_of(&isbn);
            let weighted: u32 = digits[..12]
                .iter()
                .enumerate()
                .map(|(i, d)| if i % 2 == 0 { *d } else { d * 3 })
                .sum();
            assert_eq!((weighted + digits[12]) % 10, 0, "isbn: {}", isbn);
        }
    }

    #[test]
    fn test_generated_isbn_is_valid() {
        let mut rng = StdRng::seed_from_u64(1);
        let isbn = generate_isbn13(&mut rng);
        assert!(is_valid_isbn13(&isbn));
    }

    #[test]
    fn test_generation_covers_every_digit() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen = [false; 10];
        for _ in 0..100 {
            let isbn = generate_isbn13(&mut rng);
            for d in digits_of(&isbn[3..12]) {
                seen[d as usize] = true;
            }
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_is_valid_isbn13_rejects_bad_input() {
        assert!(is_valid_isbn13("9780306406157"));
        assert!(!is_valid_isbn13("9780306406158"));
        assert!(!is_valid_isbn13("978030640615"));
        assert!(!is_valid_isbn13("978030640615X"));
        assert!(!is_valid_isbn13(""));
    }
}
