use geoscore::core::geometry::scene::WORLD_NAME;

pub struct DefaultsConfig {
    pub length_unit: String,
    pub mother: String,
    pub copy_number: i32,
    pub check_overlaps: bool,
    pub verbose_level: u8,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            length_unit: "mm".to_string(),
            mother: WORLD_NAME.to_string(),
            copy_number: 0,
            check_overlaps: false,
            verbose_level: 1,
        }
    }
}
