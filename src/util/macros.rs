/// Defines a strain-decaying skill.
///
/// Aside from the given fields, the struct receives all fields required to
/// track its strain and strain peaks. The type must provide the constants
/// `SKILL_MULTIPLIER` and `STRAIN_DECAY_BASE` as well as the method
/// `fn strain_value_of(&mut self, &DifficultyObject, &[DifficultyObject]) -> f64`.
macro_rules! define_skill {
    (
        $( #[$meta:meta] )*
        $vis:vis struct $skill:ident: $name:literal {
            $( $field_name:ident: $field_type:ty = $field_default:expr, )*
        }
    ) => {
        $( #[$meta] )*
        $vis struct $skill {
            $( $field_name: $field_type, )*
            current_strain: f64,
            current_section_peak: f64,
            current_section_end: f64,
            strain_peaks: Vec<f64>,
            object_strains: Vec<f64>,
        }

        impl $skill {
            $vis fn new() -> Self {
                Self {
                    $( $field_name: $field_default, )*
                    current_strain: 0.0,
                    current_section_peak: 0.0,
                    current_section_end: 0.0,
                    strain_peaks: Vec::with_capacity(256),
                    object_strains: Vec::with_capacity(256),
                }
            }

            fn strain_decay(ms: f64) -> f64 {
                crate::difficulty::skills::strain_decay(ms, Self::STRAIN_DECAY_BASE)
            }

            fn calculate_initial_strain(
                &self,
                time: f64,
                curr: &crate::difficulty::object::DifficultyObject,
                objects: &[crate::difficulty::object::DifficultyObject],
            ) -> f64 {
                let prev_start_time = curr
                    .previous(0, objects)
                    .map_or(0.0, |prev| prev.start_time);

                self.current_strain * Self::strain_decay(time - prev_start_time)
            }

            fn strain_value_at(
                &mut self,
                curr: &crate::difficulty::object::DifficultyObject,
                objects: &[crate::difficulty::object::DifficultyObject],
            ) -> f64 {
                self.current_strain *= Self::strain_decay(curr.delta_time);
                self.current_strain += self.strain_value_of(curr, objects) * Self::SKILL_MULTIPLIER;

                self.current_strain
            }
        }

        impl Default for $skill {
            fn default() -> Self {
                Self::new()
            }
        }

        impl crate::difficulty::skills::Skill for $skill {
            const NAME: &'static str = $name;

            fn process(
                &mut self,
                curr: &crate::difficulty::object::DifficultyObject,
                objects: &[crate::difficulty::object::DifficultyObject],
            ) {
                let section_length = crate::difficulty::skills::SECTION_LENGTH;

                // * The first object doesn't generate a strain, so we begin with an incremented section end
                if curr.idx == 0 {
                    self.current_section_end =
                        f64::ceil(curr.start_time / section_length) * section_length;
                }

                while curr.start_time > self.current_section_end {
                    self.strain_peaks.push(self.current_section_peak);

                    // * The maximum strain of the new section is not zero by default
                    // * This means we need to capture the strain level at the beginning of the new section,
                    // * and use that as the initial peak level.
                    self.current_section_peak =
                        self.calculate_initial_strain(self.current_section_end, curr, objects);
                    self.current_section_end += section_length;
                }

                let strain = self.strain_value_at(curr, objects);
                self.current_section_peak = f64::max(strain, self.current_section_peak);
                self.object_strains.push(strain);
            }

            fn into_strain_peaks(mut self) -> crate::difficulty::skills::StrainPeaks {
                self.strain_peaks.push(self.current_section_peak);

                self.strain_peaks.into_iter()
            }

            fn object_strains(&self) -> &[f64] {
                &self.object_strains
            }
        }
    };
}
