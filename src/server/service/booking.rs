use crate::{
    model::booking::BookingDto,
    server::{
        data::booking::BookingRepository,
        model::resource::ResourceKind,
        service::resource::{
            descriptor::{FieldDefault, FieldSpec, FieldType, ResourceDescriptor},
            Resource, ResourceService,
        },
        util::{money::format_amount, time::format_date_time},
    },
};

/// Status given to bookings created without one
pub const DEFAULT_BOOKING_STATUS: &str = "Pending";

const BOOKING_FIELDS: &[FieldSpec] = &[
    FieldSpec::required("booking_reference", FieldType::Text),
    FieldSpec::optional(
        "status",
        FieldType::Text,
        FieldDefault::Text(DEFAULT_BOOKING_STATUS),
    ),
    FieldSpec::required("total_amount", FieldType::Decimal),
    FieldSpec::optional("booking_date", FieldType::DateTime, FieldDefault::Now),
    FieldSpec::required("booker_id", FieldType::Reference(ResourceKind::Passenger)),
];

impl Resource for BookingRepository<'_> {
    type Dto = BookingDto;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: ResourceKind::Booking,
        fields: BOOKING_FIELDS,
    };

    fn id(model: &Self::Model) -> i32 {
        model.id
    }

    fn to_dto(model: Self::Model) -> BookingDto {
        BookingDto {
            id: model.id,
            booking_reference: model.booking_reference,
            status: model.status,
            total_amount: format_amount(model.total_amount),
            booking_date: format_date_time(model.booking_date),
            booker_id: model.booker_id,
        }
    }
}

/// The resource protocol bound to booking records
pub type BookingService<'a> = ResourceService<'a, BookingRepository<'a>>;
