use rand::Rng;

const CODE_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// 生成指定长度的随机编码（去除易混淆字符）
pub fn generate_random_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CODE_CHARSET.len());
            CODE_CHARSET[idx] as char
        })
        .collect()
}

/// 合成支付交易编号，形如 TXN-1755072000-7GK2QX9M
pub fn generate_transaction_id() -> String {
    format!(
        "TXN-{}-{}",
        chrono::Utc::now().timestamp(),
        generate_random_code(8)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_length_and_charset() {
        let code = generate_random_code(8);
        assert_eq!(code.len(), 8);
        assert!(code.bytes().all(|b| CODE_CHARSET.contains(&b)));
    }

    #[test]
    fn test_transaction_id_shape() {
        let id = generate_transaction_id();
        assert!(id.starts_with("TXN-"));
        assert_eq!(id.split('-').count(), 3);
    }
}
