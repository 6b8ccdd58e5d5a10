// Format-agnostic repository of wall textures.
// The engine and backends interact through `TextureId` only.

use std::collections::HashMap;

use crate::renderer::Rgba;

/// Runtime handle for a texture in this bank.
///
/// *Guaranteed* to remain stable for the lifetime of the bank.
pub type TextureId = u16;

/// `TextureId` whose pixels are the checkerboard fallback.
/// Always = 0 because `TextureBank::new()` inserts it first.
pub const NO_TEXTURE: TextureId = 0;

/// CPU-side storage: 32-bit **0x00RRGGBB** in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    pub name: String,
    pub w: usize,
    pub h: usize,
    pub pixels: Vec<Rgba>,
}

/// 64×64 checkerboard with 8×8 tiles (light/dark grey).
impl Default for Texture {
    fn default() -> Self {
        Texture::checker("CHECKER", 64, 8, 0x00_C8C8C8, 0x00_505050)
    }
}

impl Texture {
    /// Square checkerboard, `size` texels wide, `tiles` squares per side.
    pub fn checker(name: &str, size: usize, tiles: usize, light: Rgba, dark: Rgba) -> Self {
        let cell = (size / tiles.max(1)).max(1);
        let mut pixels = vec![0; size * size];
        for y in 0..size {
            for x in 0..size {
                pixels[y * size + x] = if ((x / cell) ^ (y / cell)) & 1 == 0 {
                    light
                } else {
                    dark
                };
            }
        }
        Texture {
            name: name.to_string(),
            w: size,
            h: size,
            pixels,
        }
    }

    /// Running-bond brick pattern with 1-texel mortar lines.
    pub fn bricks(name: &str, size: usize, brick: Rgba, mortar: Rgba) -> Self {
        let brick_w = (size / 4).max(2);
        let brick_h = (size / 8).max(2);
        let mut pixels = vec![0; size * size];
        for y in 0..size {
            let row = y / brick_h;
            let shift = if row % 2 == 0 { 0 } else { brick_w / 2 };
            for x in 0..size {
                let bx = (x + shift) % brick_w;
                let by = y % brick_h;
                pixels[y * size + x] = if bx == 0 || by == 0 { mortar } else { brick };
            }
        }
        Texture {
            name: name.to_string(),
            w: size,
            h: size,
            pixels,
        }
    }

    /// Nearest texel at integer coords, wrapping in both directions.
    /// A texture with no texels samples as black.
    #[inline(always)]
    pub fn texel(&self, u: i32, v: i32) -> Rgba {
        if self.w == 0 || self.h == 0 {
            return 0;
        }
        let x = u.rem_euclid(self.w as i32) as usize;
        let y = v.rem_euclid(self.h as i32) as usize;
        self.pixels[y * self.w + x]
    }
}

/// Things that can go wrong when using the bank.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextureError {
    /// Attempted to insert a second texture with an existing name.
    #[error("texture name `{0}` already present in bank")]
    Duplicate(String),

    /// Requested ID was never handed out by this bank.
    #[error("texture id {0} out of range")]
    BadId(TextureId),

    /// Width or height is zero, or the pixel buffer is too short.
    #[error("texture `{name}` is {w}x{h} with {len} pixels")]
    BadSize {
        name: String,
        w: usize,
        h: usize,
        len: usize,
    },
}

/// A format-agnostic cache of textures.
///
/// * Does **not** know about files or GPUs; callers generate or load pixels.
/// * Stores exactly one copy of every name.
/// * ID **0** is always the "missing" checkerboard.
pub struct TextureBank {
    by_name: HashMap<String, TextureId>,
    data: Vec<Texture>,
}

impl TextureBank {
    // ---------------------------------------------------------------------
    // Constructors
    // ---------------------------------------------------------------------

    /// Create an empty bank with a mandatory *missing* texture used as
    /// fallback.  The texture is inserted under the fixed name `"MISSING"`
    /// and obtains the handle **0**.
    pub fn new(missing_tex: Texture) -> Self {
        let mut by_name = HashMap::new();
        by_name.insert("MISSING".into(), NO_TEXTURE);
        Self {
            by_name,
            data: vec![missing_tex],
        }
    }

    pub fn default_with_checker() -> Self {
        Self::new(Texture::default())
    }

    // ---------------------------------------------------------------------
    // Query helpers
    // ---------------------------------------------------------------------

    /// Borrow a texture by id, with bounds-checking.
    pub fn texture(&self, id: TextureId) -> Result<&Texture, TextureError> {
        self.data.get(id as usize).ok_or(TextureError::BadId(id))
    }

    /// Borrow by id, falling back to the checkerboard.
    pub fn texture_or_missing(&self, id: TextureId) -> &Texture {
        self.data.get(id as usize).unwrap_or(&self.data[NO_TEXTURE as usize])
    }

    // ---------------------------------------------------------------------
    // Mutations
    // ---------------------------------------------------------------------

    /// Insert a texture under `name`.
    ///
    /// * Returns the newly assigned `TextureId`.
    /// * Fails if the name already exists (`Duplicate`).
    /// * Fails on an empty or short pixel buffer (`BadSize`).
    pub fn insert<S: Into<String>>(
        &mut self,
        name: S,
        tex: Texture,
    ) -> Result<TextureId, TextureError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(TextureError::Duplicate(name));
        }
        if tex.w == 0 || tex.h == 0 || tex.pixels.len() < tex.w * tex.h {
            return Err(TextureError::BadSize {
                name,
                w: tex.w,
                h: tex.h,
                len: tex.pixels.len(),
            });
        }
        let id = self.data.len() as TextureId;
        self.data.push(tex);
        self.by_name.insert(name, id);
        Ok(id)
    }
}

/*======================================================================*/
/*                               Tests                                  */
/*======================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_tex(color: Rgba) -> Texture {
        Texture {
            name: "Dummy".to_string(),
            w: 2,
            h: 2,
            pixels: vec![color; 4],
        }
    }

    #[test]
    fn insert_and_lookup() {
        let mut bank = TextureBank::default_with_checker();
        let red = bank.insert("RED", dummy_tex(0x00_FF0000)).unwrap();
        let blue = bank.insert("BLUE", dummy_tex(0x00_0000FF)).unwrap();

        assert_ne!(red, NO_TEXTURE);
        assert_ne!(blue, red);

        assert_eq!(bank.texture(red).unwrap().pixels[0], 0x00_FF0000);
        assert_eq!(bank.texture(blue).unwrap().pixels[0], 0x00_0000FF);
    }

    #[test]
    fn duplicate_name_rejected() {
        let mut bank = TextureBank::default_with_checker();
        bank.insert("WOOD", dummy_tex(1)).unwrap();
        let err = bank.insert("WOOD", dummy_tex(2)).unwrap_err();
        assert_eq!(err, TextureError::Duplicate("WOOD".into()));
        // nothing was stored: checker is 0, WOOD is 1, the next id is 2
        assert_eq!(bank.insert("OAK", dummy_tex(3)).unwrap(), 2);
    }

    #[test]
    fn bad_id_guard() {
        let bank = TextureBank::default_with_checker();
        let bad = TextureId::MAX;
        assert_eq!(bank.texture(bad).unwrap_err(), TextureError::BadId(bad));
        assert_eq!(bank.texture_or_missing(bad).name, "CHECKER");
    }

    #[test]
    fn degenerate_textures_rejected() {
        let mut bank = TextureBank::default_with_checker();
        let flat = Texture {
            name: "FLAT".into(),
            w: 0,
            h: 8,
            pixels: Vec::new(),
        };
        assert!(matches!(
            bank.insert("FLAT", flat.clone()),
            Err(TextureError::BadSize { w: 0, h: 8, .. })
        ));
        let short = Texture {
            pixels: vec![1; 3],
            ..dummy_tex(1)
        };
        assert!(matches!(bank.insert("SHORT", short), Err(TextureError::BadSize { len: 3, .. })));

        // sampling never panics, even outside the bank
        assert_eq!(flat.texel(5, -2), 0);
    }

    #[test]
    fn checker_alternates_and_wraps() {
        let t = Texture::checker("C", 4, 2, 1, 2);
        assert_eq!(t.texel(0, 0), 1);
        assert_eq!(t.texel(2, 0), 2);
        assert_eq!(t.texel(2, 2), 1);
        assert_eq!(t.texel(-1, 0), t.texel(3, 0));
        assert_eq!(t.texel(4, 5), t.texel(0, 1));
    }

    #[test]
    fn bricks_have_mortar_rows() {
        let t = Texture::bricks("B", 16, 7, 9);
        assert!((0..16).all(|x| t.texel(x, 0) == 9));
        assert_eq!(t.texel(1, 1), 7);
    }
}
