const MS_PER_SECOND: f64 = 1000.0;
const MS_PER_MINUTE: f64 = 60.0 * MS_PER_SECOND;
const MS_PER_HOUR: f64 = 60.0 * MS_PER_MINUTE;
const MS_PER_DAY: f64 = 24.0 * MS_PER_HOUR;

/// Time left until the event, split into display units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    finished: bool,
}

impl Countdown {
    /// Break `target_ms - now_ms` into days/hours/minutes/seconds.
    /// A negative distance collapses to all zeros and reports finished.
    pub fn until(target_ms: f64, now_ms: f64) -> Self {
        let distance = target_ms - now_ms;
        if distance < 0.0 {
            return Self {
                days: 0,
                hours: 0,
                minutes: 0,
                seconds: 0,
                finished: true,
            };
        }
        Self {
            days: (distance / MS_PER_DAY).floor() as i64,
            hours: ((distance % MS_PER_DAY) / MS_PER_HOUR).floor() as i64,
            minutes: ((distance % MS_PER_HOUR) / MS_PER_MINUTE).floor() as i64,
            seconds: ((distance % MS_PER_MINUTE) / MS_PER_SECOND).floor() as i64,
            finished: false,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Zero-padded text for the days, hours, minutes and seconds fields.
    pub fn fields(&self) -> [String; 4] {
        [self.days, self.hours, self.minutes, self.seconds].map(pad2)
    }
}

#[inline]
fn pad2(value: i64) -> String {
    format!("{:02}", value)
}
