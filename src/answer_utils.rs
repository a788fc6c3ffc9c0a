/// Lectura permisiva de la respuesta del jugador.
///
/// Salta espacios iniciales, acepta un signo opcional y toma el prefijo de
/// dígitos más largo: `"12abc"` -> 12, `"4.9"` -> 4. Sin dígitos (o con
/// desbordamiento) devuelve `None`, que nunca coincide con una respuesta.
pub fn parse_answer(input: &str) -> Option<i32> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    let value = if negative { -magnitude } else { magnitude };
    i32::try_from(value).ok()
}
