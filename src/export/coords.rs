use glam::DVec3;

/// Map a host (Z-up) position into nTiled space (Y-up, Z flipped).
pub fn to_ntiled(v: DVec3) -> DVec3 {
	DVec3::new(v.x, v.z, -v.y)
}

/// Inverse of [`to_ntiled`].
#[cfg(test)]
pub(crate) fn from_ntiled(v: DVec3) -> DVec3 {
	DVec3::new(v.x, -v.z, v.y)
}

/// Reorder host XYZ Euler angles into nTiled axis order. Angles keep their sign.
pub fn swap_euler(rotation: DVec3) -> DVec3 {
	DVec3::new(rotation.x, rotation.z, rotation.y)
}
