/// The kind a raw operand token naturally belongs to, decided purely by its spelling —
/// independent of what the instruction actually expects in that slot.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Token {
    Register(u8),
    Integer(u8),
    Symbol(String),
}

/// Splits `text` on whitespace and commas, both separators, runs collapsing.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect()
}

fn parse_register(token: &str) -> Option<u8> {
    let bytes = token.as_bytes();
    if bytes.len() == 2 && (bytes[0] == b'R' || bytes[0] == b'r') && (b'0'..=b'7').contains(&bytes[1]) {
        Some(bytes[1] - b'0')
    } else {
        None
    }
}

fn looks_like_integer(token: &str) -> bool {
    token
        .strip_prefix('-')
        .unwrap_or(token)
        .as_bytes()
        .first()
        .map_or(false, u8::is_ascii_digit)
}

/// Parses a decimal, `0x` hex or `0b` binary literal (optionally negative) into its
/// two's-complement byte representation. `Err(())` means malformed or out of range.
pub fn parse_integer(token: &str) -> Result<u8, ()> {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let magnitude: i32 = if let Some(hex) = unsigned.strip_prefix("0x").or_else(|| unsigned.strip_prefix("0X")) {
        i32::from_str_radix(hex, 16).map_err(|_| ())?
    } else if let Some(bin) = unsigned.strip_prefix("0b").or_else(|| unsigned.strip_prefix("0B")) {
        i32::from_str_radix(bin, 2).map_err(|_| ())?
    } else {
        unsigned.parse::<i32>().map_err(|_| ())?
    };

    let value = if negative { -magnitude } else { magnitude };
    if !(-128..=255).contains(&value) {
        return Err(());
    }
    Ok(value as u8)
}

/// Classifies a raw token as a register, integer literal or symbol reference.
/// Returns `Err(())` for a token that *looks* numeric but fails to parse.
pub fn classify(token: &str) -> Result<Token, ()> {
    if let Some(register) = parse_register(token) {
        return Ok(Token::Register(register));
    }
    if looks_like_integer(token) {
        return parse_integer(token).map(Token::Integer);
    }
    Ok(Token::Symbol(token.to_string()))
}
