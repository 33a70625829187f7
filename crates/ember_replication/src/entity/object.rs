//! Base fields every world object carries.

use ember_shared::{Guid, ObjectType, ObjectTypeMask};

use crate::values::ValueRecord;

field_table! {
    /// Fields of the object schema.
    pub enum ObjectField in OBJECT_FIELDS {
        /// Object guid.
        Guid => ["guid": U64],
        /// Object-type bitmask.
        Type => ["type": U32],
        /// Template entry id.
        Entry => ["entry": U32],
        /// Uniform scale.
        ScaleX => ["scale_x": F32],
        /// Unused trailing block.
        Padding => [_: U32[1]],
    }
}

/// Object part of an entity.
#[derive(Clone, Debug)]
pub struct ObjectValues {
    record: ValueRecord,
}

values_wrapper!(ObjectValues, ObjectField, "object", OBJECT_FIELDS);

impl ObjectValues {
    scalar_accessors! {
        ObjectField;
        /// Object guid.
        guid, set_guid: Guid => Guid;
        /// Object-type bitmask.
        type_mask, set_type_mask: Type => ObjectTypeMask;
        /// Template entry id.
        entry, set_entry: Entry => u32;
        /// Uniform scale.
        scale_x, set_scale_x: ScaleX => f32;
    }

    /// Sets the type mask from the types this object is.
    pub fn set_types(&mut self, types: &[ObjectType]) {
        self.set_type_mask(ObjectTypeMask::from_types(types));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let object = ObjectValues::new();
        let schema = object.record().schema();
        assert_eq!(schema.total_blocks(), 6);
        assert_eq!(schema.sections().len(), 4);
        assert_eq!(ObjectField::ScaleX.descriptor().name, "scale_x");
    }

    #[test]
    fn test_zero_full_marshal_is_25_bytes() {
        let mut object = ObjectValues::new();
        let bytes = object.marshal(false);
        assert_eq!(bytes.len(), 25);
        assert_eq!(&bytes[..5], &[0x01, 0x1F, 0x00, 0x00, 0x00]);
        assert!(bytes[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_populated_full_marshal() {
        let mut object = ObjectValues::new();
        object.set_guid(Guid::new(0x1122_3344_5566_7788));
        object.set_types(&[ObjectType::Object, ObjectType::Unit, ObjectType::Player]);
        object.set_entry(0x1234_5678);
        object.set_scale_x(f32::from_bits(0xEFBE_ADDE));

        let expected: Vec<u8> = [
            &[0x01, 0x1F, 0x00, 0x00, 0x00][..],
            &[0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11],
            &[0x19, 0x00, 0x00, 0x00],
            &[0x78, 0x56, 0x34, 0x12],
            &[0xDE, 0xAD, 0xBE, 0xEF],
        ]
        .concat();
        assert_eq!(object.marshal(false), expected);
    }

    #[test]
    fn test_partial_after_entry_change() {
        let mut object = ObjectValues::new();
        object.marshal(false);
        object.set_entry(42);
        assert_eq!(object.marshal(true), vec![0x01, 0x08, 0x00, 0x00, 0x00, 42, 0, 0, 0]);
    }
}
