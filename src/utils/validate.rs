use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

static CARD_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{13,19}$").expect("Invalid card number regex"));

static EXPIRY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[0-2])/([0-9]{2})$").expect("Invalid expiry regex"));

static CVV_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,4}$").expect("Invalid cvv regex"));

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 课程评分校验：1 <= rating <= 5
pub fn validate_rating(rating: f64) -> Result<(), &'static str> {
    if !rating.is_finite() || !(1.0..=5.0).contains(&rating) {
        return Err("Rating must be between 1 and 5");
    }
    Ok(())
}

/// 学习进度校验：0 <= progress <= 100
pub fn validate_progress(progress: f64) -> Result<(), &'static str> {
    if !progress.is_finite() || !(0.0..=100.0).contains(&progress) {
        return Err("Progress must be between 0 and 100");
    }
    Ok(())
}

/// 支付桩的卡片格式校验
///
/// 只验证格式：卡号 13-19 位数字（允许空格分隔），有效期 MM/YY，
/// CVV 3-4 位数字。不做 Luhn 校验，也不发起真实扣款。
pub fn validate_card_details(
    card_number: &str,
    expiry_date: &str,
    cvv: &str,
) -> Result<(), &'static str> {
    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if !CARD_NUMBER_RE.is_match(&digits) {
        return Err("Card number format is invalid");
    }
    if !EXPIRY_RE.is_match(expiry_date) {
        return Err("Expiry date must be in MM/YY format");
    }
    if !CVV_RE.is_match(cvv) {
        return Err("CVV format is invalid");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("student@example.com").is_ok());
        assert!(validate_email("a.b+c@sub.example.dev").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("@example.com").is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(1.0).is_ok());
        assert!(validate_rating(4.5).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(0.9).is_err());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_progress_bounds() {
        assert!(validate_progress(0.0).is_ok());
        assert!(validate_progress(100.0).is_ok());
        assert!(validate_progress(-1.0).is_err());
        assert!(validate_progress(100.5).is_err());
    }

    #[test]
    fn test_card_details() {
        assert!(validate_card_details("4242424242424242", "12/27", "123").is_ok());
        assert!(validate_card_details("4242 4242 4242 4242", "01/30", "1234").is_ok());

        assert!(validate_card_details("1234", "12/27", "123").is_err());
        assert!(validate_card_details("4242424242424242", "13/27", "123").is_err());
        assert!(validate_card_details("4242424242424242", "2027-12", "123").is_err());
        assert!(validate_card_details("4242424242424242", "12/27", "12").is_err());
    }
}
