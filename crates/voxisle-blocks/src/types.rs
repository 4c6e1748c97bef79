/// Material identifier stored per voxel. The discriminants are the on-buffer
/// ids; meshing and the overview renderer rely on them staying stable.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Voxel {
    #[default]
    Air = 0,
    Stone = 1,
    Dirt = 2,
    Grass = 3,
    Sand = 4,
    Snow = 5,
    Wood = 6,
    Leaves = 7,
}

impl Voxel {
    pub const AIR: Voxel = Voxel::Air;

    #[inline]
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Voxel> {
        Some(match id {
            0 => Voxel::Air,
            1 => Voxel::Stone,
            2 => Voxel::Dirt,
            3 => Voxel::Grass,
            4 => Voxel::Sand,
            5 => Voxel::Snow,
            6 => Voxel::Wood,
            7 => Voxel::Leaves,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Voxel::Air => "air",
            Voxel::Stone => "stone",
            Voxel::Dirt => "dirt",
            Voxel::Grass => "grass",
            Voxel::Sand => "sand",
            Voxel::Snow => "snow",
            Voxel::Wood => "wood",
            Voxel::Leaves => "leaves",
        }
    }

    pub fn by_name(name: &str) -> Option<Voxel> {
        Some(match name {
            "air" => Voxel::Air,
            "stone" => Voxel::Stone,
            "dirt" => Voxel::Dirt,
            "grass" => Voxel::Grass,
            "sand" => Voxel::Sand,
            "snow" => Voxel::Snow,
            "wood" => Voxel::Wood,
            "leaves" => Voxel::Leaves,
            _ => return None,
        })
    }

    #[inline]
    pub fn is_air(self) -> bool {
        matches!(self, Voxel::Air)
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        !self.is_air()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        assert_eq!(Voxel::Air.id(), 0);
        assert_eq!(Voxel::Stone.id(), 1);
        assert_eq!(Voxel::Dirt.id(), 2);
        assert_eq!(Voxel::Grass.id(), 3);
        assert_eq!(Voxel::Sand.id(), 4);
        assert_eq!(Voxel::Snow.id(), 5);
        assert_eq!(Voxel::Wood.id(), 6);
        assert_eq!(Voxel::Leaves.id(), 7);
    }

    #[test]
    fn unknown_ids_and_names_are_rejected() {
        assert_eq!(Voxel::from_id(8), None);
        assert_eq!(Voxel::by_name("bedrock"), None);
        assert_eq!(Voxel::by_name("grass"), Some(Voxel::Grass));
    }

    #[test]
    fn default_is_air() {
        assert_eq!(Voxel::default(), Voxel::Air);
        assert!(Voxel::Air.is_air());
        assert!(Voxel::Leaves.is_solid());
    }
}
