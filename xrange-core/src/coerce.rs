//! 数值强制转换
//!
//! - `parse_number`: 字符串 → 定宽浮点数，无法识别时为 NaN
//! - `parse_integer`: 字符串 → 大整数，只接受整数字面量，不丢精度
//! - `float_to_integer`: 浮点数 → 大整数，要求有限且为整数

use crate::error::{RangeError, Result};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

/// 数字字符串两侧允许的空白：Unicode 空白加 BOM，不含 NEL (U+0085)
fn is_blank(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// 去掉首尾空白
fn trim(text: &str) -> &str {
    text.trim_matches(is_blank)
}

/// 拆分 `0x` / `0o` / `0b` 前缀，返回 (基数, 数字部分)
fn split_radix(literal: &str) -> Option<(u32, &str)> {
    let bytes = literal.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &literal[2..]))
}

/// 解析无符号的带前缀整数
fn parse_radix(radix: u32, digits: &str) -> Option<BigInt> {
    // BigInt::parse_bytes 会接受下划线和符号，这里先严格校验
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

/// 十进制字面量只允许数字、小数点、指数和符号
fn is_decimal_literal(literal: &str) -> bool {
    literal.bytes().any(|b| b.is_ascii_digit())
        && literal
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
}

/// 把字符串转换为定宽数字
///
/// 空串（去空白后）为 0；支持 `Infinity`、前缀整数和十进制小数/指数。
/// 其余一律返回 NaN，交给校验阶段报错。
pub fn parse_number(text: &str) -> f64 {
    let literal = trim(text);
    if literal.is_empty() {
        return 0.0;
    }

    if let Some((radix, digits)) = split_radix(literal) {
        return parse_radix(radix, digits)
            .and_then(|value| value.to_f64())
            .unwrap_or(f64::NAN);
    }

    match literal {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust 的 f64 解析会接受 "inf" / "nan"，需先过滤
        _ if is_decimal_literal(literal) => literal.parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// 把字符串精确转换为大整数
///
/// 只接受（可带符号的）十进制整数或前缀整数，其余返回 None。
pub fn parse_integer(text: &str) -> Option<BigInt> {
    let literal = trim(text);
    if literal.is_empty() {
        return Some(BigInt::zero());
    }

    if let Some((radix, digits)) = split_radix(literal) {
        return parse_radix(radix, digits);
    }

    let (negative, digits) = match literal.as_bytes()[0] {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)?;
    Some(if negative { -magnitude } else { magnitude })
}

/// 把定宽数字转换为大整数
pub fn float_to_integer(value: f64) -> Result<BigInt> {
    if value.is_nan() {
        return Err(RangeError::NotANumber);
    }
    if value.is_infinite() {
        return Err(RangeError::Unbounded { value });
    }
    if value.fract() != 0.0 {
        return Err(RangeError::NonIntegral { value });
    }
    BigInt::from_f64(value).ok_or(RangeError::NotANumber)
}
