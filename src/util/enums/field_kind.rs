use std::fmt::{self, Display, Formatter};

/// User-entry fields that make up a catalog query
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone)]
pub enum FieldKind {
    ObjectId,
    RightAscension,
    Declination,
    FieldOfView,
    MagLimit,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::ObjectId,
        FieldKind::RightAscension,
        FieldKind::Declination,
        FieldKind::FieldOfView,
        FieldKind::MagLimit,
    ];
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::ObjectId => "object identifier",
            FieldKind::RightAscension => "right ascension",
            FieldKind::Declination => "declination",
            FieldKind::FieldOfView => "field of view",
            FieldKind::MagLimit => "magnitude limit",
        };
        f.write_str(name)
    }
}
