use std::fmt;

use crate::{elem, vec4, Mat3, Mat4, Matrix, One, Scalar, Vec3, Vector, Zero};

mod ops;

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;
/// A quaternion with [`f64`] components.
pub type Quatd = Quat<f64>;

/// A quaternion consisting of 3 imaginary components and a real component,
/// stored in the order `x`, `y`, `z`, `w`.
///
/// Unit-length quaternions are commonly used to represent rotations in 3D
/// space. None of the operations here require unit length up front:
/// [`Quat::to_mat3`] and [`Quat::to_mat4`] divide by the current magnitude,
/// so any quaternion with a magnitude above zero converts to a proper
/// rotation matrix. Converting a zero-magnitude quaternion divides by zero
/// and produces garbage; never doing that is the caller's responsibility.
///
/// Unlike [`Vector`], the components are exposed through accessor methods
/// ([`Quat::x`], [`Quat::set_x`], ...) rather than fields.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The rotation that leaves everything where it is: (0, 0, 0, 1).
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its four components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] whose `x`, `y`
    /// and `z` components hold the imaginary parts and whose `w` component
    /// holds the real part.
    #[inline]
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Converts this quaternion into the equivalent 4-dimensional
    /// [`Vector`].
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the components as a slice, in `x`, `y`, `z`, `w` order.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        self.vec.as_slice()
    }

    /// Converts this quaternion into its component array.
    #[inline]
    pub fn into_array(self) -> [T; 4] {
        self.vec.into_array()
    }
}

impl<T: Copy> Quat<T> {
    /// The first imaginary component.
    #[inline]
    pub fn x(&self) -> T {
        self.vec[0]
    }

    /// The second imaginary component.
    #[inline]
    pub fn y(&self) -> T {
        self.vec[1]
    }

    /// The third imaginary component.
    #[inline]
    pub fn z(&self) -> T {
        self.vec[2]
    }

    /// The real component.
    #[inline]
    pub fn w(&self) -> T {
        self.vec[3]
    }

    /// Sets the first imaginary component.
    #[inline]
    pub fn set_x(&mut self, value: T) {
        self.vec[0] = value;
    }

    /// Sets the second imaginary component.
    #[inline]
    pub fn set_y(&mut self, value: T) {
        self.vec[1] = value;
    }

    /// Sets the third imaginary component.
    #[inline]
    pub fn set_z(&mut self, value: T) {
        self.vec[2] = value;
    }

    /// Sets the real component.
    #[inline]
    pub fn set_w(&mut self, value: T) {
        self.vec[3] = value;
    }
}

impl<T: Scalar> Quat<T> {
    /// Builds the rotation of `radians` around `axis`.
    ///
    /// The axis is normalized first, so it does not need to have unit
    /// length. A zero-magnitude axis leaves the normalization a no-op and
    /// yields a meaningless quaternion; callers must supply a non-zero
    /// axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let q = Quatd::from_axis_angle(Vec3d::X, FRAC_PI_2);
    /// assert!((q.x() - 0.7071).abs() < 0.01);
    /// assert!((q.w() - 0.7071).abs() < 0.01);
    /// ```
    pub fn from_axis_angle(axis: Vec3<T>, radians: f64) -> Self {
        let mut axis = axis;
        axis.normalize();

        let half = radians / 2.0;
        let sin_half = half.sin();

        Self::new(
            T::from_f64(axis[0].to_f64() * sin_half),
            T::from_f64(axis[1].to_f64() * sin_half),
            T::from_f64(axis[2].to_f64() * sin_half),
            T::from_f64(half.cos()),
        )
    }

    /// The rotation obtained by starting from the identity and rotating
    /// around the X, then the Y, then the Z axis by the given radians.
    ///
    /// Quaternion composition does not commute, so the axis order is part
    /// of the contract.
    pub fn from_euler_angles(x_radians: f64, y_radians: f64, z_radians: f64) -> Self {
        let mut q = Self::IDENTITY;
        q.rotate_axis(Vec3::X, x_radians);
        q.rotate_axis(Vec3::Y, y_radians);
        q.rotate_axis(Vec3::Z, z_radians);
        q
    }

    /// Returns the magnitude of this quaternion, as [`f64`] regardless of
    /// the component type.
    pub fn magnitude(&self) -> f64 {
        self.vec.magnitude()
    }

    /// Whether the squared magnitude is within
    /// [`elem::DEFAULT_NORMALIZED_EPSILON`] of one.
    pub fn is_normalized(&self) -> bool {
        self.vec.is_normalized()
    }

    /// Whether the squared magnitude is within `epsilon` of one.
    pub fn is_normalized_within(&self, epsilon: f64) -> bool {
        self.vec.is_normalized_within(epsilon)
    }

    /// Scales this quaternion to unit magnitude in place. Returns `false`
    /// — leaving the components untouched — when the magnitude is zero.
    ///
    /// The same integer truncation behavior as [`Vector::normalize`]
    /// applies.
    pub fn normalize(&mut self) -> bool {
        self.vec.normalize()
    }

    /// Computes the dot product of `self` and `other`, as [`f64`].
    pub fn dot(self, other: Self) -> f64 {
        self.vec.dot(other.vec)
    }

    /// Applies `rotation` to this quaternion: `self` becomes
    /// `rotation * self`.
    ///
    /// The rotation being applied always ends up on the left of the
    /// product; with non-commutative quaternion multiplication this is the
    /// difference between composing onto the existing rotation and
    /// composing under it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use gyre_linalg::*;
    /// let mut q = Quatd::new(0.5, 0.5, 0.75, 1.0);
    /// q.rotate(Quatd::new(0.0, 1.0, 0.0, 1.0));
    /// assert_eq!(q, Quatd::new(1.25, 1.5, 0.25, 0.5));
    /// ```
    pub fn rotate(&mut self, rotation: Self) {
        *self = rotation * *self;
    }

    /// Builds the rotation of `radians` around `axis` and applies it, as
    /// [`Quat::rotate`] does.
    pub fn rotate_axis(&mut self, axis: Vec3<T>, radians: f64) {
        self.rotate(Self::from_axis_angle(axis, radians));
    }

    /// Converts this quaternion to a 3x3 rotation matrix.
    ///
    /// The components are divided by the current magnitude first, so a
    /// non-unit quaternion produces the same orthonormal matrix as its
    /// normalized counterpart. A zero-magnitude quaternion divides by
    /// zero here; the caller is responsible for never converting one.
    pub fn to_mat3(&self) -> Mat3<T> {
        let e = self.rotation_elements();
        Matrix::from_rows([
            [e[0], e[1], e[2]],
            [e[3], e[4], e[5]],
            [e[6], e[7], e[8]],
        ])
    }

    /// Converts this quaternion to a 4x4 homogeneous rotation matrix: the
    /// 3x3 rotation in the upper-left block, zeroes in the last row and
    /// column, and a one in the bottom-right corner.
    ///
    /// The same magnitude handling as [`Quat::to_mat3`] applies.
    pub fn to_mat4(&self) -> Mat4<T> {
        let e = self.rotation_elements();
        let o = T::ZERO;
        Matrix::from_rows([
            [e[0], e[1], e[2], o],
            [e[3], e[4], e[5], o],
            [e[6], e[7], e[8], o],
            [o, o, o, T::ONE],
        ])
    }

    /// The nine elements of the equivalent rotation matrix, row-major.
    fn rotation_elements(&self) -> [T; 9] {
        let mag = self.magnitude();

        let x = T::from_f64(self.x().to_f64() / mag);
        let y = T::from_f64(self.y().to_f64() / mag);
        let z = T::from_f64(self.z().to_f64() / mag);
        let w = T::from_f64(self.w().to_f64() / mag);

        let xx = (x * x).to_f64();
        let xy = (x * y).to_f64();
        let xz = (x * z).to_f64();
        let xw = (x * w).to_f64();
        let yy = (y * y).to_f64();
        let yz = (y * z).to_f64();
        let yw = (y * w).to_f64();
        let zz = (z * z).to_f64();
        let zw = (z * w).to_f64();

        [
            T::from_f64(1.0 - 2.0 * (yy + zz)),
            T::from_f64(2.0 * (xy - zw)),
            T::from_f64(2.0 * (xz + yw)),
            T::from_f64(2.0 * (xy + zw)),
            T::from_f64(1.0 - 2.0 * (xx + zz)),
            T::from_f64(2.0 * (yz - xw)),
            T::from_f64(2.0 * (xz - yw)),
            T::from_f64(2.0 * (yz + xw)),
            T::from_f64(1.0 - 2.0 * (xx + yy)),
        ]
    }
}

impl<T> From<[T; 4]> for Quat<T> {
    #[inline]
    fn from(value: [T; 4]) -> Self {
        Self { vec: value.into() }
    }
}

impl<T> From<Quat<T>> for [T; 4] {
    #[inline]
    fn from(value: Quat<T>) -> Self {
        value.into_array()
    }
}

impl<T> fmt::Debug for Quat<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quat")?;
        fmt::Debug::fmt(&self.vec, f)
    }
}

/// Renders the quaternion as a single bracketed row with two fixed
/// fraction digits, eg. `[ 0.00, 0.00, 0.00, 1.00 ]`.
impl<T> fmt::Display for Quat<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        elem::fmt_grid(f, self.as_slice(), 4)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{vec3, vec4, Vec3d};

    use super::*;

    #[test]
    fn identity() {
        let q = Quatd::IDENTITY;
        assert_eq!(q.x(), 0.0);
        assert_eq!(q.y(), 0.0);
        assert_eq!(q.z(), 0.0);
        assert_eq!(q.w(), 1.0);
    }

    #[test]
    fn accessors_and_indexing_agree() {
        let mut q = Quat::new(0, 0, 0, 0);
        q.set_x(1);
        q.set_y(2);
        q.set_z(3);
        q.set_w(4);

        assert_eq!(q.x(), 1);
        assert_eq!(q.y(), 2);
        assert_eq!(q.z(), 3);
        assert_eq!(q.w(), 4);
        assert_eq!(q[0], 1);
        assert_eq!(q[1], 2);
        assert_eq!(q[2], 3);
        assert_eq!(q[3], 4);

        q[2] = 9;
        assert_eq!(q.z(), 9);
    }

    #[test]
    fn conversions() {
        let q = Quat::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.into_vec(), vec4(1.0, 2.0, 3.0, 4.0));
        assert_eq!(<[f64; 4]>::from(q), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(Quat::from_vec(vec4(1.0, 2.0, 3.0, 4.0)), q);
    }

    #[test]
    fn vector_style_arithmetic() {
        let base = Quat::new(1.1, 2.2, 3.3, 4.4);
        let addend = Quat::new(2.2, 3.3, 4.4, 5.5);

        assert_abs_diff_eq!(base + addend, Quat::new(3.3, 5.5, 7.7, 9.9), epsilon = 0.01);
        assert_abs_diff_eq!((base + addend) - addend, base, epsilon = 0.01);
        assert_abs_diff_eq!(base * 2.0, Quat::new(2.2, 4.4, 6.6, 8.8), epsilon = 0.01);
        assert_abs_diff_eq!(2.0 * base, base * 2.0, epsilon = 0.01);

        let mut q = base;
        q += addend;
        q -= addend;
        q *= 2.0;
        assert_abs_diff_eq!(q, Quat::new(2.2, 4.4, 6.6, 8.8), epsilon = 0.01);
    }

    #[test]
    fn magnitude_and_dot() {
        let q = Quat::new(1, 2, 3, 4);
        assert!((q.magnitude() - 5.4772).abs() < 0.01);
        assert_eq!(q.dot(q), 30.0);
        assert_eq!(Quat::new(0, 0, 0, 0).magnitude(), 0.0);
    }

    #[test]
    fn normalize() {
        let mut q = Quat::new(1.1, 2.2, 3.3, 4.4);
        assert!(q.normalize());
        assert_abs_diff_eq!(
            q,
            Quat::new(0.1826, 0.3651, 0.5477, 0.7303),
            epsilon = 0.01
        );
        assert!(q.is_normalized());

        let mut zero = Quat::new(0.0, 0.0, 0.0, 0.0);
        assert!(!zero.normalize());
        assert_eq!(zero, Quat::new(0.0, 0.0, 0.0, 0.0));

        // Integer components all truncate to zero, but the call succeeds.
        let mut int = Quat::new(1, 2, 3, 4);
        assert!(int.normalize());
        assert_eq!(int, Quat::new(0, 0, 0, 0));
    }

    #[test]
    fn is_normalized_with_epsilon() {
        let q = Quat::new(0.0f32, 0.0, 0.8, 0.8);
        assert!(q.is_normalized_within(0.5));
        assert!(!q.is_normalized_within(0.01));
        assert!(Quat::new(0.0f32, 0.0, 0.7071068, 0.7071068).is_normalized());
    }

    #[test]
    fn hamilton_product_does_not_commute() {
        let a = Quatd::from_axis_angle(Vec3d::X, 1.0);
        let b = Quatd::from_axis_angle(Vec3d::Y, 0.5);
        let ab = a * b;
        let ba = b * a;
        assert!((ab.x() - ba.x()).abs() > 1e-6 || (ab.z() - ba.z()).abs() > 1e-6);

        // Multiplying with the identity changes nothing, from either side.
        assert_abs_diff_eq!(a * Quatd::IDENTITY, a, epsilon = 1e-12);
        assert_abs_diff_eq!(Quatd::IDENTITY * a, a, epsilon = 1e-12);
    }

    #[test]
    fn rotate_by_quaternion() {
        let mut q = Quatd::new(0.5, 0.5, 0.75, 1.0);
        q.rotate(Quatd::new(0.0, 1.0, 0.0, 1.0));
        assert_abs_diff_eq!(q, Quatd::new(1.25, 1.5, 0.25, 0.5), epsilon = 0.01);
    }

    #[test]
    fn rotate_by_axis_angle() {
        // 90 degrees around X, then -90 degrees around Y.
        let mut q = Quatd::new(0.7071, 0.0, 0.0, 0.7071);
        q.rotate_axis(vec3(0.0, 1.0, 0.0), (-90.0f64).to_radians());
        assert_abs_diff_eq!(q, Quatd::new(0.5, -0.5, 0.5, 0.5), epsilon = 0.01);
    }

    #[test]
    fn from_axis_angle_normalizes_the_axis() {
        let a = Quatd::from_axis_angle(vec3(0.0, 0.0, 1.0), 1.0);
        let b = Quatd::from_axis_angle(vec3(0.0, 0.0, 10.0), 1.0);
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
    }

    #[test]
    fn to_mat3_for_quarter_turn_around_y() {
        let q = Quatf::new(0.0, 0.7071, 0.0, 0.7071);
        let expected = Matrix::from_rows([
            [0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0],
            [-1.0, 0.0, 0.0],
        ]);
        assert_abs_diff_eq!(q.to_mat3(), expected, epsilon = 0.01);

        // A non-unit quaternion converts to the same matrix.
        let scaled = Quatf::new(0.0, 1.4142, 0.0, 1.4142);
        assert_abs_diff_eq!(scaled.to_mat3(), expected, epsilon = 0.01);
    }

    #[test]
    fn to_mat4_embeds_the_rotation_homogeneously() {
        let q = Quatf::new(0.0, 0.7071, 0.0, 0.7071);
        let expected = Matrix::from_rows([
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_abs_diff_eq!(q.to_mat4(), expected, epsilon = 0.01);

        let scaled = Quatf::new(0.0, 1.4142, 0.0, 1.4142);
        assert_abs_diff_eq!(scaled.to_mat4(), expected, epsilon = 0.01);
    }

    #[test]
    fn rotate_then_transform() {
        let mut q = Quatd::IDENTITY;
        q.rotate_axis(Vec3d::X, 90.0f64.to_radians());
        q.rotate_axis(Vec3d::Y, 90.0f64.to_radians());
        q.rotate_axis(Vec3d::Z, 45.0f64.to_radians());

        let transformed = q.to_mat4() * vec4(0.0, 1.0, 0.0, 1.0);
        assert_abs_diff_eq!(
            transformed,
            vec4(0.7071, 0.7071, 0.0, 1.0),
            epsilon = 0.01
        );
    }

    #[test]
    fn from_euler_angles_single_axes() {
        let x = Quatf::from_euler_angles(90.0f64.to_radians(), 0.0, 0.0);
        assert_abs_diff_eq!(x, Quatf::new(0.7071, 0.0, 0.0, 0.7071), epsilon = 0.01);

        let y = Quatf::from_euler_angles(0.0, 90.0f64.to_radians(), 0.0);
        assert_abs_diff_eq!(y, Quatf::new(0.0, 0.7071, 0.0, 0.7071), epsilon = 0.01);

        let z = Quatf::from_euler_angles(0.0, 0.0, (-90.0f64).to_radians());
        assert_abs_diff_eq!(z, Quatf::new(0.0, 0.0, -0.7071, 0.7071), epsilon = 0.01);
    }

    #[test]
    fn from_euler_angles_composes_in_xyz_order() {
        let q = Quatf::from_euler_angles(
            90.0f64.to_radians(),
            90.0f64.to_radians(),
            45.0f64.to_radians(),
        );
        assert_abs_diff_eq!(
            q,
            Quatf::new(0.2706, 0.6533, -0.2706, 0.6533),
            epsilon = 0.01
        );
    }

    #[test]
    fn fmt() {
        let q = Quatd::new(0.012, 1.0, 2.0, 3.3333);
        assert_eq!(format!("{q}"), "[ 0.01, 1.00, 2.00, 3.33 ]");
        assert_eq!(format!("{:?}", Quatd::IDENTITY), "Quat(0.0, 0.0, 0.0, 1.0)");
    }
}
