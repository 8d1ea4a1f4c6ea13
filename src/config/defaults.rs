//! Default value helpers for serde.

pub fn enabled() -> bool {
    true
}

pub fn cell_size_in() -> f32 {
    12.0
}

pub fn diagonal_cost() -> f32 {
    std::f32::consts::SQRT_2
}

pub fn max_iterations() -> usize {
    100_000
}

pub fn walking_speed_ft_s() -> f32 {
    4.0
}

pub fn landmark_radius_cells() -> f32 {
    2.0
}
