//! CLSAG verification

use crate::ring_loop::{core, Mode};
use crate::{Clsag, ClsagError};
use curve25519_dalek::{ristretto::RistrettoPoint, traits::IsIdentity};

impl Clsag {
    /// Verify this signature over `msg` for `ring`, binding `key_image` and `pseudo_out`
    pub fn verify(
        &self,
        ring: &[[RistrettoPoint; 2]],
        key_image: &RistrettoPoint,
        pseudo_out: &RistrettoPoint,
        msg: &[u8; 32],
    ) -> Result<(), ClsagError> {
        // Scalars and points were checked for canonicity at decode
        if ring.is_empty() {
            return Err(ClsagError::InvalidRing);
        }
        if ring.len() != self.s.len() {
            return Err(ClsagError::InvalidS);
        }
        if key_image.is_identity() {
            return Err(ClsagError::InvalidImage);
        }
        if self.d.is_identity() {
            return Err(ClsagError::InvalidD);
        }

        let (_, c1) = core(
            ring,
            key_image,
            pseudo_out,
            msg,
            &self.d,
            &self.s,
            &Mode::Verify(self.c1),
        );
        if c1 != self.c1 {
            return Err(ClsagError::InvalidC1);
        }
        Ok(())
    }
}
