use crate::model::{Question, Template};
use rand::Rng;
use std::ops::RangeInclusive;

/// Genera `count` preguntas, eligiendo plantilla al azar para cada una.
pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Question> {
    (0..count)
        .map(|_| {
            let template = Template::ALL[rng.gen_range(0..Template::ALL.len())];
            build(template, rng)
        })
        .collect()
}

/// Construye una pregunta concreta de la plantilla indicada.
pub fn build<R: Rng + ?Sized>(template: Template, rng: &mut R) -> Question {
    match template {
        Template::SquaredBinomial => squared_binomial(rng),
        Template::Quadratic => quadratic(rng),
        Template::LinearFraction => linear_fraction(rng),
        Template::BinomialProduct => binomial_product(rng),
    }
}

// a(x ± b)^2
fn squared_binomial<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let a = rng.gen_range(2..=5);
    let b = rand_non_zero(rng, -5..=5);
    let x_value = rand_non_zero(rng, -4..=4);
    let text = format!("{a}(x {})^2", signed(b));
    let answer = a * (x_value + b).pow(2);
    Question {
        template: Template::SquaredBinomial,
        text,
        x_value,
        answer,
    }
}

// ax^2 ± bx [± c]
fn quadratic<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let a = rng.gen_range(2..=5);
    let b = rand_non_zero(rng, -7..=7);
    let c = rng.gen_range(-10..=10);
    let x_value = rand_non_zero(rng, -3..=3);

    let mut text = format!("{a}x^2 {}x", signed(b));
    // c = 0 no se escribe, pero sigue en la cuenta
    if c != 0 {
        text.push(' ');
        text.push_str(&signed(c));
    }
    let answer = a * x_value.pow(2) + b * x_value + c;
    Question {
        template: Template::Quadratic,
        text,
        x_value,
        answer,
    }
}

// (ax ± b) / c, siempre con división exacta
fn linear_fraction<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let a = rng.gen_range(2..=5);
    let x_value = rng.gen_range(1..=5);
    let c = rng.gen_range(2..=5);

    let (b, result) = loop {
        let result = rng.gen_range(2..=10);
        let b = result * c - a * x_value;
        if b != 0 {
            break (b, result);
        }
    };

    let text = format!("({a}x {}) / {c}", signed(b));
    Question {
        template: Template::LinearFraction,
        text,
        x_value,
        answer: result,
    }
}

// (x ± a)(x ± b)
fn binomial_product<R: Rng + ?Sized>(rng: &mut R) -> Question {
    let a = rand_non_zero(rng, -6..=6);
    let b = rand_non_zero(rng, -6..=6);
    let x_value = rand_non_zero(rng, -4..=4);
    let text = format!("(x {})(x {})", signed(a), signed(b));
    let answer = (x_value + a) * (x_value + b);
    Question {
        template: Template::BinomialProduct,
        text,
        x_value,
        answer,
    }
}

/// Muestreo por rechazo: repite hasta sacar un valor distinto de cero.
fn rand_non_zero<R: Rng + ?Sized>(rng: &mut R, range: RangeInclusive<i32>) -> i32 {
    loop {
        let value = rng.gen_range(range.clone());
        if value != 0 {
            return value;
        }
    }
}

fn signed(value: i32) -> String {
    let sign = if value > 0 { '+' } else { '-' };
    format!("{sign} {}", value.abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::iter::Peekable;
    use std::str::Chars;

    /// Evaluador mínimo para comprobar que el texto y la respuesta coinciden.
    /// Admite + - * / ^, paréntesis y multiplicación implícita (`3(x - 2)`, `2x`).
    struct Eval<'a> {
        chars: Peekable<Chars<'a>>,
        x: i64,
    }

    impl<'a> Eval<'a> {
        fn run(text: &'a str, x: i32) -> i64 {
            let mut eval = Eval {
                chars: text.chars().peekable(),
                x: x as i64,
            };
            let value = eval.expr();
            eval.skip_ws();
            assert!(eval.chars.peek().is_none(), "texto sin consumir en {text:?}");
            value
        }

        fn skip_ws(&mut self) {
            while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
                self.chars.next();
            }
        }

        fn peek(&mut self) -> Option<char> {
            self.skip_ws();
            self.chars.peek().copied()
        }

        fn expr(&mut self) -> i64 {
            let mut value = self.term();
            while let Some(op) = self.peek().filter(|c| *c == '+' || *c == '-') {
                self.chars.next();
                let rhs = self.term();
                value = if op == '+' { value + rhs } else { value - rhs };
            }
            value
        }

        fn term(&mut self) -> i64 {
            let mut value = self.power();
            loop {
                match self.peek() {
                    Some('/') => {
                        self.chars.next();
                        let divisor = self.power();
                        assert_eq!(value % divisor, 0, "división no exacta");
                        value /= divisor;
                    }
                    Some('*') => {
                        self.chars.next();
                        value *= self.power();
                    }
                    Some(c) if c == 'x' || c == '(' || c.is_ascii_digit() => {
                        value *= self.power();
                    }
                    _ => return value,
                }
            }
        }

        fn power(&mut self) -> i64 {
            let base = self.primary();
            if self.peek() == Some('^') {
                self.chars.next();
                let exp = self.number();
                base.pow(exp as u32)
            } else {
                base
            }
        }

        fn primary(&mut self) -> i64 {
            match self.peek() {
                Some('x') => {
                    self.chars.next();
                    self.x
                }
                Some('(') => {
                    self.chars.next();
                    let value = self.expr();
                    assert_eq!(self.peek(), Some(')'));
                    self.chars.next();
                    value
                }
                Some('-') => {
                    self.chars.next();
                    -self.primary()
                }
                _ => self.number(),
            }
        }

        fn number(&mut self) -> i64 {
            self.skip_ws();
            let mut digits = String::new();
            while let Some(c) = self.chars.peek().copied().filter(char::is_ascii_digit) {
                digits.push(c);
                self.chars.next();
            }
            digits.parse().expect("se esperaba un número")
        }
    }

    #[test]
    fn generate_returns_exact_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(15, &mut rng).len(), 15);
        assert_eq!(generate(0, &mut rng).len(), 0);
        assert_eq!(generate(3, &mut rng).len(), 3);
    }

    #[test]
    fn every_template_text_evaluates_to_answer() {
        let mut rng = StdRng::seed_from_u64(42);
        for template in Template::ALL {
            for _ in 0..500 {
                let q = build(template, &mut rng);
                assert_eq!(q.template, template);
                assert_eq!(
                    Eval::run(&q.text, q.x_value),
                    q.answer as i64,
                    "{} con x = {}",
                    q.text,
                    q.x_value
                );
            }
        }
    }

    #[test]
    fn mixed_batches_stay_consistent() {
        let mut rng = StdRng::seed_from_u64(2024);
        for q in generate(2_000, &mut rng) {
            assert_eq!(Eval::run(&q.text, q.x_value), q.answer as i64, "{}", q.text);
        }
    }

    #[test]
    fn linear_fraction_is_exact_and_b_non_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let q = build(Template::LinearFraction, &mut rng);
            // "(ax ± b) / c"
            let inner = q.text.trim_start_matches('(');
            let (numerator, c) = inner.split_once(") / ").expect("formato (ax ± b) / c");
            let c: i32 = c.parse().unwrap();
            let mut parts = numerator.split(' ');
            let a: i32 = parts.next().unwrap().trim_end_matches('x').parse().unwrap();
            let sign = parts.next().unwrap();
            let b: i32 = parts.next().unwrap().parse().unwrap();
            let b = if sign == "-" { -b } else { b };

            assert_ne!(b, 0);
            assert_eq!((a * q.x_value + b) % c, 0);
            assert_eq!((a * q.x_value + b) / c, q.answer);
            assert!((2..=10).contains(&q.answer));
            assert!((1..=5).contains(&q.x_value));
        }
    }

    #[test]
    fn non_zero_draws_never_yield_zero() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1_000 {
            assert_ne!(rand_non_zero(&mut rng, -1..=1), 0);
        }
        for template in [
            Template::SquaredBinomial,
            Template::Quadratic,
            Template::BinomialProduct,
        ] {
            for _ in 0..200 {
                assert_ne!(build(template, &mut rng).x_value, 0);
            }
        }
    }

    #[test]
    fn quadratic_omits_zero_constant() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen_short = false;
        for _ in 0..2_000 {
            let q = build(Template::Quadratic, &mut rng);
            let terms = q.text.split(' ').count();
            assert!(terms == 3 || terms == 5, "{}", q.text);
            seen_short |= terms == 3;
        }
        assert!(seen_short, "c = 0 debería aparecer alguna vez");
    }

    #[test]
    fn signs_render_with_absolute_value() {
        assert_eq!(signed(3), "+ 3");
        assert_eq!(signed(-4), "- 4");
    }

    #[test]
    fn display_text_uses_superscript() {
        let mut rng = StdRng::seed_from_u64(3);
        let q = build(Template::SquaredBinomial, &mut rng);
        assert!(q.display_text().ends_with(")²"));
        assert!(!q.display_text().contains('^'));
    }
}
