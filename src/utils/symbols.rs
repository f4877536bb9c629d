pub const SUPERSCRIPT: [&str; 10] = ["⁰", "¹", "²", "³", "⁴", "⁵", "⁶", "⁷", "⁸", "⁹"];

pub mod triangle {
    pub const UP: &str = "▲";
    pub const DOWN: &str = "▼";
}

/// Render a number with superscript digits, `12` -> `¹²`.
pub fn superscript(n: usize) -> String {
    n.to_string()
        .bytes()
        .map(|b| SUPERSCRIPT[(b - b'0') as usize])
        .collect()
}
