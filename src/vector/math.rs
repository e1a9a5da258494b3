//! Vector math operations for Vec3
//! Provides methods for vector normalization, dot and cross products, and
//! approximate comparison.

use super::Vec3;

impl Vec3 {
    /// Calculates the squared magnitude (length) of the vector.
    ///
    /// This is more efficient than `norm()` as it avoids the square root
    /// operation. Use this when you only need to compare magnitudes, as the
    /// pair list generator and the dotted-surface filter do.
    ///
    /// The squared norm is calculated as: x² + y² + z²
    ///
    /// # Examples
    /// ```
    /// # use mesomd_lib::vector::Vec3;
    /// let v = Vec3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.norm_squared(), 25.0);
    /// ```
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Calculates the magnitude (length) of the vector.
    ///
    /// Returns the Euclidean norm: √(x² + y² + z²)
    ///
    /// # Examples
    /// ```
    /// # use mesomd_lib::vector::Vec3;
    /// let v = Vec3::new(3.0, 4.0, 0.0);
    /// assert_eq!(v.norm(), 5.0);
    /// ```
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Returns a unit vector in the same direction as this vector.
    ///
    /// If the vector has zero or near-zero magnitude (within floating-point
    /// epsilon), returns the zero vector to avoid division by zero and
    /// numerical instability.
    ///
    /// # Examples
    /// ```
    /// # use mesomd_lib::vector::Vec3;
    /// let v = Vec3::new(3.0, 4.0, 0.0);
    /// assert!((v.normalize().norm() - 1.0).abs() < f64::EPSILON);
    /// assert_eq!(Vec3::zero().normalize(), Vec3::zero());
    /// ```
    pub fn normalize(&self) -> Self {
        let norm_sq = self.norm_squared();
        if norm_sq > f64::EPSILON * f64::EPSILON {
            let inv_norm = norm_sq.sqrt().recip();
            Vec3 {
                x: self.x * inv_norm,
                y: self.y * inv_norm,
                z: self.z * inv_norm,
            }
        } else {
            Vec3::zero()
        }
    }

    /// Calculates the dot product (scalar product) with another vector.
    ///
    /// Returns a scalar value calculated as: a·b = ax*bx + ay*by + az*bz,
    /// equal to |a||b|cos(θ) where θ is the angle between the vectors.
    ///
    /// # Examples
    /// ```
    /// # use mesomd_lib::vector::Vec3;
    /// let a = Vec3::new(1.0, 2.0, 3.0);
    /// let b = Vec3::new(4.0, 5.0, 6.0);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another vector.
    ///
    /// The result is perpendicular to both inputs with magnitude
    /// |a||b|sin(θ). Face normals of the triangulated surfaces are computed
    /// this way.
    ///
    /// # Examples
    /// ```
    /// # use mesomd_lib::vector::Vec3;
    /// assert_eq!(Vec3::x_hat().cross(&Vec3::y_hat()), Vec3::z_hat());
    /// ```
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Compares two vectors for approximate equality within a tolerance.
    ///
    /// Each component must differ by no more than `tolerance`. Used by the
    /// tests, where exact floating-point comparison would be brittle.
    ///
    /// # Examples
    /// ```
    /// # use mesomd_lib::vector::Vec3;
    /// let a = Vec3::new(1.0, 2.0, 3.0);
    /// let b = Vec3::new(1.0000001, 2.0000001, 3.0000001);
    /// assert!(a.approx_eq(&b, 1e-6));
    /// assert!(!a.approx_eq(&b, 1e-8));
    /// ```
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance
            && (self.y - other.y).abs() <= tolerance
            && (self.z - other.z).abs() <= tolerance
    }

    /// True if all three components are finite numbers.
    ///
    /// Integrators use this to detect numerical blow-up, which is
    /// step-fatal.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::fmt::Display for Vec3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.10e} {:.10e} {:.10e}", self.x, self.y, self.z)
    }
}
