/// 90 kHz clock ratio: the stream clock is `90 kHz * N / K`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clock90kHz {
    pub n: u32,
    pub k: u32,
}

/// What the timing section of the payload carries.
///
/// This is the wire-effective view of a record: the clock pair can only
/// exist together with a tick count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimingInfo {
    Absent,
    Present {
        clock: Option<Clock90kHz>,
        num_units_in_tick: u32,
    },
}

/// In-memory AVC timing and HRD descriptor.
///
/// The optional fields are independent here, as they are in the attribute
/// tree. Serialization goes through [`AvcTimingHrdDescriptor::timing_info`],
/// which decides what the wire form can express.
///
/// # Examples
/// ```
/// use hrdscope_core::descriptors::avc_timing_hrd::{AvcTimingHrdDescriptor, TimingInfo};
///
/// let desc = AvcTimingHrdDescriptor::default();
/// assert_eq!(desc.timing_info(), TimingInfo::Absent);
/// assert_eq!(desc.serialize(), vec![0x7E, 0x1F]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AvcTimingHrdDescriptor {
    pub hrd_management_valid: bool,
    /// 90 kHz clock numerator, meaningful only together with `k_90khz`.
    pub n_90khz: Option<u32>,
    /// 90 kHz clock denominator, meaningful only together with `n_90khz`.
    pub k_90khz: Option<u32>,
    pub num_units_in_tick: Option<u32>,
    pub fixed_frame_rate: bool,
    pub temporal_poc: bool,
    pub picture_to_display_conversion: bool,
}

impl AvcTimingHrdDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset every field to the default-empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Clock pair, when both halves are set.
    pub fn clock_90khz(&self) -> Option<Clock90kHz> {
        match (self.n_90khz, self.k_90khz) {
            (Some(n), Some(k)) => Some(Clock90kHz { n, k }),
            _ => None,
        }
    }

    /// Timing section as it will be serialized.
    ///
    /// Presence of the whole section follows `num_units_in_tick` alone; a
    /// clock pair without a tick count is not representable and is dropped.
    pub fn timing_info(&self) -> TimingInfo {
        match self.num_units_in_tick {
            Some(num_units_in_tick) => TimingInfo::Present {
                clock: self.clock_90khz(),
                num_units_in_tick,
            },
            None => TimingInfo::Absent,
        }
    }

    /// Replace the optional fields with the content of `info`.
    pub fn set_timing_info(&mut self, info: TimingInfo) {
        match info {
            TimingInfo::Absent => {
                self.n_90khz = None;
                self.k_90khz = None;
                self.num_units_in_tick = None;
            }
            TimingInfo::Present {
                clock,
                num_units_in_tick,
            } => {
                self.n_90khz = clock.map(|c| c.n);
                self.k_90khz = clock.map(|c| c.k);
                self.num_units_in_tick = Some(num_units_in_tick);
            }
        }
    }

    /// True when a serialize/deserialize round trip preserves every field.
    pub fn is_wire_consistent(&self) -> bool {
        match (self.n_90khz, self.k_90khz) {
            (Some(_), Some(_)) => self.num_units_in_tick.is_some(),
            (None, None) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_requires_both_halves() {
        let desc = AvcTimingHrdDescriptor {
            n_90khz: Some(1),
            ..Default::default()
        };
        assert_eq!(desc.clock_90khz(), None);
        assert!(!desc.is_wire_consistent());
    }

    #[test]
    fn clock_without_ticks_is_absent_on_the_wire() {
        let desc = AvcTimingHrdDescriptor {
            n_90khz: Some(1),
            k_90khz: Some(300),
            ..Default::default()
        };
        assert_eq!(desc.timing_info(), TimingInfo::Absent);
        assert!(!desc.is_wire_consistent());
    }

    #[test]
    fn timing_info_present() {
        let desc = AvcTimingHrdDescriptor {
            n_90khz: Some(1),
            k_90khz: Some(300),
            num_units_in_tick: Some(1001),
            ..Default::default()
        };
        assert_eq!(
            desc.timing_info(),
            TimingInfo::Present {
                clock: Some(Clock90kHz { n: 1, k: 300 }),
                num_units_in_tick: 1001,
            }
        );
        assert!(desc.is_wire_consistent());
    }

    #[test]
    fn set_timing_info_replaces_optionals() {
        let mut desc = AvcTimingHrdDescriptor {
            n_90khz: Some(5),
            k_90khz: Some(6),
            num_units_in_tick: Some(7),
            temporal_poc: true,
            ..Default::default()
        };
        desc.set_timing_info(TimingInfo::Present {
            clock: None,
            num_units_in_tick: 9,
        });
        assert_eq!(desc.n_90khz, None);
        assert_eq!(desc.k_90khz, None);
        assert_eq!(desc.num_units_in_tick, Some(9));
        assert!(desc.temporal_poc);

        desc.set_timing_info(TimingInfo::Absent);
        assert_eq!(desc.num_units_in_tick, None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut desc = AvcTimingHrdDescriptor {
            hrd_management_valid: true,
            num_units_in_tick: Some(1),
            picture_to_display_conversion: true,
            ..Default::default()
        };
        desc.clear();
        assert_eq!(desc, AvcTimingHrdDescriptor::default());
    }
}
