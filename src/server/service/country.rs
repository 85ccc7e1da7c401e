use crate::{
    model::country::CountryDto,
    server::{
        data::country::CountryRepository,
        model::resource::ResourceKind,
        service::resource::{
            descriptor::{FieldSpec, FieldType, ResourceDescriptor},
            Resource, ResourceService,
        },
    },
};

const COUNTRY_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("name", FieldType::Text),
    FieldSpec::required("code", FieldType::Text),
];

impl Resource for CountryRepository<'_> {
    type Dto = CountryDto;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: ResourceKind::Country,
        fields: COUNTRY_FIELDS,
    };

    fn id(model: &Self::Model) -> i32 {
        model.id
    }

    fn to_dto(model: Self::Model) -> CountryDto {
        CountryDto {
            id: model.id,
            name: model.name,
            code: model.code,
        }
    }
}

/// The resource protocol bound to country records
pub type CountryService<'a> = ResourceService<'a, CountryRepository<'a>>;
