use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Intervalo del refresco del cronómetro en pantalla.
pub const TICK: Duration = Duration::from_secs(1);

/// Fuente de tiempo en milisegundos.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Reloj de pared. `chrono` funciona igual en nativo y en wasm.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Reloj controlado a mano (tests). Los clones comparten la misma hora.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set_ms(&self, ms: i64) {
        self.now.set(ms);
    }

    pub fn advance_ms(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.advance_ms(secs * 1000);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

/// Cronómetro de un intento.
///
/// Mientras está en marcha pide un refresco por segundo (ver [`QuizTimer::next_tick`]);
/// al pararlo ese refresco queda cancelado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizTimer {
    started_at_ms: i64,
    stopped_at_ms: Option<i64>,
}

impl QuizTimer {
    pub fn start(clock: &dyn Clock) -> Self {
        Self {
            started_at_ms: clock.now_ms(),
            stopped_at_ms: None,
        }
    }

    /// Para el cronómetro y devuelve la marca final. Idempotente: una
    /// segunda llamada devuelve la misma marca.
    pub fn stop(&mut self, clock: &dyn Clock) -> i64 {
        *self.stopped_at_ms.get_or_insert_with(|| clock.now_ms())
    }

    pub fn is_running(&self) -> bool {
        self.stopped_at_ms.is_none()
    }

    pub fn started_at_ms(&self) -> i64 {
        self.started_at_ms
    }

    pub fn stopped_at_ms(&self) -> Option<i64> {
        self.stopped_at_ms
    }

    /// Segundos completos transcurridos: floor((fin - inicio) / 1000).
    pub fn elapsed_secs(&self, clock: &dyn Clock) -> u64 {
        let end = self.stopped_at_ms.unwrap_or_else(|| clock.now_ms());
        ((end - self.started_at_ms).max(0) / 1000) as u64
    }

    /// Tiempo hasta el próximo cambio de segundo, o `None` si ya está parado.
    pub fn next_tick(&self, clock: &dyn Clock) -> Option<Duration> {
        if !self.is_running() {
            return None;
        }
        let elapsed_ms = (clock.now_ms() - self.started_at_ms).max(0);
        let tick_ms = TICK.as_millis() as i64;
        let remaining = tick_ms - elapsed_ms % tick_ms;
        Some(Duration::from_millis(remaining as u64))
    }
}

/// `mm:ss`, con ceros a la izquierda. Los minutos pueden pasar de 59.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_floored_to_whole_seconds() {
        let clock = ManualClock::new(10_000);
        let timer = QuizTimer::start(&clock);
        clock.advance_ms(45_999);
        assert_eq!(timer.elapsed_secs(&clock), 45);
        clock.advance_ms(1);
        assert_eq!(timer.elapsed_secs(&clock), 46);
    }

    #[test]
    fn stop_twice_keeps_first_end_timestamp() {
        let clock = ManualClock::new(0);
        let mut timer = QuizTimer::start(&clock);
        clock.advance_secs(12);
        let first = timer.stop(&clock);
        clock.advance_secs(30);
        let second = timer.stop(&clock);

        assert_eq!(first, 12_000);
        assert_eq!(second, first);
        assert_eq!(timer.stopped_at_ms(), Some(12_000));
        assert_eq!(timer.elapsed_secs(&clock), 12);
    }

    #[test]
    fn tick_is_cancelled_once_stopped() {
        let clock = ManualClock::new(0);
        let mut timer = QuizTimer::start(&clock);
        clock.advance_ms(300);
        assert_eq!(timer.next_tick(&clock), Some(Duration::from_millis(700)));
        clock.advance_ms(700);
        assert_eq!(timer.next_tick(&clock), Some(TICK));

        timer.stop(&clock);
        assert!(!timer.is_running());
        assert_eq!(timer.next_tick(&clock), None);
    }

    #[test]
    fn clock_going_backwards_does_not_underflow() {
        let clock = ManualClock::new(5_000);
        let timer = QuizTimer::start(&clock);
        clock.set_ms(1_000);
        assert_eq!(timer.elapsed_secs(&clock), 0);
    }

    #[test]
    fn format_time_pads_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(45), "00:45");
        assert_eq!(format_time(299), "04:59");
        assert_eq!(format_time(3_725), "62:05");
    }

    #[test]
    fn system_clock_moves_forward() {
        let clock = SystemClock;
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
