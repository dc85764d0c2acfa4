/// Counts animation steps and formats the on-screen readout.
#[derive(Default)]
pub struct StepCounter {
    count: u64,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_up(&mut self) {
        self.count += 1;
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn get(&self) -> u64 {
        self.count
    }

    pub fn display(&self) -> String {
        format!("Step={}", self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_and_resets() {
        let mut counter = StepCounter::new();
        assert_eq!(counter.get(), 0);
        counter.count_up();
        counter.count_up();
        assert_eq!(counter.get(), 2);
        counter.reset();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn display_prefixes_step() {
        let mut counter = StepCounter::new();
        assert_eq!(counter.display(), "Step=0");
        counter.count_up();
        assert_eq!(counter.display(), "Step=1");
    }
}
