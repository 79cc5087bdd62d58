use crate::tree::{Element, TreeError};

use super::layout;
use super::record::AvcTimingHrdDescriptor;

impl AvcTimingHrdDescriptor {
    /// Map every field to an attribute. Unset optionals are left out.
    ///
    /// This is a field-by-field transcription: a clock pair without a tick
    /// count is written even though the binary form cannot carry it.
    pub fn to_text(&self) -> Element {
        let mut root = Element::new(layout::ELEMENT_NAME);
        root.set_bool_attribute(layout::ATTR_HRD_MANAGEMENT_VALID, self.hrd_management_valid);
        root.set_optional_int_attribute(layout::ATTR_N_90KHZ, self.n_90khz);
        root.set_optional_int_attribute(layout::ATTR_K_90KHZ, self.k_90khz);
        root.set_optional_int_attribute(layout::ATTR_NUM_UNITS_IN_TICK, self.num_units_in_tick);
        root.set_bool_attribute(layout::ATTR_FIXED_FRAME_RATE, self.fixed_frame_rate);
        root.set_bool_attribute(layout::ATTR_TEMPORAL_POC, self.temporal_poc);
        root.set_bool_attribute(
            layout::ATTR_PICTURE_TO_DISPLAY_CONVERSION,
            self.picture_to_display_conversion,
        );
        root
    }

    /// Read a record back from its attribute form.
    ///
    /// The four boolean attributes are required; the three integers are
    /// optional and must fit in 32 bits.
    ///
    /// # Examples
    /// ```
    /// use hrdscope_core::descriptors::avc_timing_hrd::AvcTimingHrdDescriptor;
    /// use hrdscope_core::tree::Element;
    ///
    /// let mut element = Element::new("AVC_timing_and_HRD_descriptor");
    /// for name in ["hrd_management_valid", "fixed_frame_rate", "temporal_poc", "picture_to_display_conversion"] {
    ///     element.set_bool_attribute(name, true);
    /// }
    /// let desc = AvcTimingHrdDescriptor::from_text(&element)?;
    /// assert_eq!(desc.num_units_in_tick, None);
    /// # Ok::<(), hrdscope_core::tree::TreeError>(())
    /// ```
    pub fn from_text(element: &Element) -> Result<Self, TreeError> {
        element.expect_name(layout::ELEMENT_NAME)?;
        Ok(Self {
            hrd_management_valid: element.get_bool_attribute(
                layout::ATTR_HRD_MANAGEMENT_VALID,
                true,
                false,
            )?,
            n_90khz: element.get_optional_int_attribute(layout::ATTR_N_90KHZ)?,
            k_90khz: element.get_optional_int_attribute(layout::ATTR_K_90KHZ)?,
            num_units_in_tick: element.get_optional_int_attribute(layout::ATTR_NUM_UNITS_IN_TICK)?,
            fixed_frame_rate: element.get_bool_attribute(
                layout::ATTR_FIXED_FRAME_RATE,
                true,
                false,
            )?,
            temporal_poc: element.get_bool_attribute(layout::ATTR_TEMPORAL_POC, true, false)?,
            picture_to_display_conversion: element.get_bool_attribute(
                layout::ATTR_PICTURE_TO_DISPLAY_CONVERSION,
                true,
                false,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptors::avc_timing_hrd::{AvcTimingHrdDescriptor, layout};
    use crate::tree::{Element, TreeError};

    fn required_only() -> Element {
        let mut element = Element::new(layout::ELEMENT_NAME);
        element.set_bool_attribute(layout::ATTR_HRD_MANAGEMENT_VALID, true);
        element.set_bool_attribute(layout::ATTR_FIXED_FRAME_RATE, false);
        element.set_bool_attribute(layout::ATTR_TEMPORAL_POC, true);
        element.set_bool_attribute(layout::ATTR_PICTURE_TO_DISPLAY_CONVERSION, false);
        element
    }

    #[test]
    fn to_text_omits_unset_optionals() {
        let element = AvcTimingHrdDescriptor::default().to_text();
        assert_eq!(element.name, layout::ELEMENT_NAME);
        assert_eq!(element.attributes.len(), 4);
        assert!(!element.has_attribute(layout::ATTR_N_90KHZ));
        assert!(!element.has_attribute(layout::ATTR_K_90KHZ));
        assert!(!element.has_attribute(layout::ATTR_NUM_UNITS_IN_TICK));
        assert_eq!(element.attribute(layout::ATTR_TEMPORAL_POC), Some("false"));
    }

    #[test]
    fn to_text_writes_every_set_field() {
        let desc = AvcTimingHrdDescriptor {
            hrd_management_valid: true,
            n_90khz: Some(1),
            k_90khz: Some(300),
            num_units_in_tick: Some(1001),
            fixed_frame_rate: true,
            temporal_poc: false,
            picture_to_display_conversion: true,
        };
        let element = desc.to_text();
        assert_eq!(
            element.to_string(),
            "<AVC_timing_and_HRD_descriptor K_90khz=\"300\" N_90khz=\"1\" \
             fixed_frame_rate=\"true\" hrd_management_valid=\"true\" \
             num_units_in_tick=\"1001\" picture_to_display_conversion=\"true\" \
             temporal_poc=\"false\"/>"
        );
        assert_eq!(AvcTimingHrdDescriptor::from_text(&element).unwrap(), desc);
    }

    #[test]
    fn required_booleans_only() {
        let desc = AvcTimingHrdDescriptor::from_text(&required_only()).unwrap();
        assert!(desc.hrd_management_valid);
        assert!(desc.temporal_poc);
        assert_eq!(desc.n_90khz, None);
        assert_eq!(desc.k_90khz, None);
        assert_eq!(desc.num_units_in_tick, None);
    }

    #[test]
    fn text_round_trip_preserves_attributes() {
        let mut element = required_only();
        element.set_attribute(layout::ATTR_N_90KHZ, "27");
        element.set_attribute(layout::ATTR_K_90KHZ, "1");
        let desc = AvcTimingHrdDescriptor::from_text(&element).unwrap();
        assert_eq!(desc.to_text(), element);
    }

    #[test]
    fn clock_without_ticks_survives_text_but_not_binary() {
        let mut element = required_only();
        element.set_attribute(layout::ATTR_N_90KHZ, "1");
        element.set_attribute(layout::ATTR_K_90KHZ, "300");
        let desc = AvcTimingHrdDescriptor::from_text(&element).unwrap();
        assert_eq!(desc.n_90khz, Some(1));

        let decoded = AvcTimingHrdDescriptor::deserialize(&desc.serialize()).unwrap();
        assert_eq!(decoded.n_90khz, None);
        assert_ne!(decoded.to_text(), element);
    }

    #[test]
    fn missing_boolean_fails() {
        let mut element = required_only();
        element.attributes.remove(layout::ATTR_TEMPORAL_POC);
        let err = AvcTimingHrdDescriptor::from_text(&element).unwrap_err();
        assert!(matches!(
            err,
            TreeError::MissingAttribute { ref attribute, .. } if attribute == layout::ATTR_TEMPORAL_POC
        ));
    }

    #[test]
    fn out_of_range_integer_fails() {
        let mut element = required_only();
        element.set_attribute(layout::ATTR_NUM_UNITS_IN_TICK, "0x1_0000_0000");
        let err = AvcTimingHrdDescriptor::from_text(&element).unwrap_err();
        assert!(matches!(err, TreeError::MalformedValue { .. }));
    }

    #[test]
    fn wrong_element_name_fails() {
        let mut element = required_only();
        element.name = "AVC_video_descriptor".to_string();
        assert!(matches!(
            AvcTimingHrdDescriptor::from_text(&element),
            Err(TreeError::UnexpectedElement { .. })
        ));
    }

    #[test]
    fn hex_and_grouped_integers() {
        let mut element = required_only();
        element.set_attribute(layout::ATTR_NUM_UNITS_IN_TICK, "1,001");
        element.set_attribute(layout::ATTR_N_90KHZ, "0x10");
        element.set_attribute(layout::ATTR_K_90KHZ, "2");
        let desc = AvcTimingHrdDescriptor::from_text(&element).unwrap();
        assert_eq!(desc.num_units_in_tick, Some(1001));
        assert_eq!(desc.n_90khz, Some(16));
    }
}
