use crate::Rovib;

impl Rovib {
    /// rotational term value F(J) including centrifugal distortion
    pub fn frot(&self, j: usize) -> f64 {
        let jj = (j * (j + 1)) as f64;
        self.b * jj - self.d * jj * jj
    }

    /// anharmonic vibrational term value G(v)
    pub fn gvib(&self, v: usize) -> f64 {
        let v = v as f64 + 0.5;
        self.nue * v - self.xe * self.nue * v * v
    }

    /// combined rotation-vibration term value S(v, J), including the
    /// rotation-vibration coupling
    pub fn srovib(&self, v: usize, j: usize) -> f64 {
        let jj = (j * (j + 1)) as f64;
        self.gvib(v) + self.frot(j) - self.alfae * (v as f64 + 0.5) * jj
    }
}
