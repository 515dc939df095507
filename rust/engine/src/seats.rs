/// The set of seats still contesting the current hand.
///
/// One flag per seat; membership tests and removal are constant time.
/// Iteration happens to follow seat order, but callers must not depend on
/// any particular order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Participants {
    seats: Vec<bool>,
    len: usize,
}

impl Participants {
    pub fn new(table_size: usize) -> Self {
        Self {
            seats: vec![false; table_size],
            len: 0,
        }
    }

    /// Returns `false` if the seat was already present or is off the table.
    pub fn insert(&mut self, seat: usize) -> bool {
        match self.seats.get_mut(seat) {
            Some(slot) if !*slot => {
                *slot = true;
                self.len += 1;
                true
            }
            _ => false,
        }
    }

    /// Returns `false` if the seat was not a participant.
    pub fn remove(&mut self, seat: usize) -> bool {
        match self.seats.get_mut(seat) {
            Some(slot) if *slot => {
                *slot = false;
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, seat: usize) -> bool {
        self.seats.get(seat).copied().unwrap_or(false)
    }

    pub fn clear(&mut self) {
        self.seats.iter_mut().for_each(|s| *s = false);
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.seats
            .iter()
            .enumerate()
            .filter_map(|(seat, &present)| present.then_some(seat))
    }

    /// The first participant strictly clockwise of `from`, wrapping around
    /// the table. `from` itself is only returned when it is the sole
    /// participant.
    pub fn next_clockwise(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..=n)
            .map(|step| (from + step) % n)
            .find(|&seat| self.seats[seat])
    }
}
