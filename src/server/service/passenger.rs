use crate::{
    model::passenger::PassengerDto,
    server::{
        data::passenger::PassengerRepository,
        model::resource::ResourceKind,
        service::resource::{
            descriptor::{FieldDefault, FieldSpec, FieldType, ResourceDescriptor},
            Resource, ResourceService,
        },
        util::time::format_date,
    },
};

const PASSENGER_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("first_name", FieldType::Text),
    FieldSpec::required("last_name", FieldType::Text),
    FieldSpec::required("email", FieldType::Text).unique(),
    FieldSpec::optional("phone", FieldType::Text, FieldDefault::Null),
    FieldSpec::required("passport_number", FieldType::Text),
    FieldSpec::required("date_of_birth", FieldType::Date),
];

impl Resource for PassengerRepository<'_> {
    type Dto = PassengerDto;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: ResourceKind::Passenger,
        fields: PASSENGER_FIELDS,
    };

    fn id(model: &Self::Model) -> i32 {
        model.id
    }

    fn to_dto(model: Self::Model) -> PassengerDto {
        PassengerDto {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            email: model.email,
            phone: model.phone,
            passport_number: model.passport_number,
            date_of_birth: format_date(model.date_of_birth),
        }
    }
}

/// The resource protocol bound to passenger records
pub type PassengerService<'a> = ResourceService<'a, PassengerRepository<'a>>;
