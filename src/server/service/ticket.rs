use crate::{
    model::ticket::{TicketDto, TicketSummaryDto},
    server::{
        data::ticket::TicketRepository,
        error::Error,
        model::{db::TicketWithReferences, resource::ResourceKind},
        service::resource::{
            descriptor::{FieldDefault, FieldSpec, FieldType, ResourceDescriptor},
            Resource, ResourceService,
        },
        util::money::format_amount,
    },
};

const TICKET_FIELDS: &[FieldSpec] = &[
    FieldSpec::optional("seat_number", FieldType::Text, FieldDefault::Null),
    FieldSpec::required("price", FieldType::Decimal),
    FieldSpec::required("booking_id", FieldType::Reference(ResourceKind::Booking)),
    FieldSpec::required("flight_id", FieldType::Reference(ResourceKind::Flight)),
    FieldSpec::required("passenger_id", FieldType::Reference(ResourceKind::Passenger)),
    FieldSpec::required(
        "travel_class_id",
        FieldType::Reference(ResourceKind::TravelClass),
    ),
];

impl Resource for TicketRepository<'_> {
    type Dto = TicketDto;

    const DESCRIPTOR: ResourceDescriptor = ResourceDescriptor {
        kind: ResourceKind::Ticket,
        fields: TICKET_FIELDS,
    };

    fn id(model: &Self::Model) -> i32 {
        model.id
    }

    fn to_dto(model: Self::Model) -> TicketDto {
        TicketDto {
            id: model.id,
            seat_number: model.seat_number,
            price: format_amount(model.price),
            booking_id: model.booking_id,
            flight_id: model.flight_id,
            passenger_id: model.passenger_id,
            travel_class_id: model.travel_class_id,
        }
    }
}

/// The resource protocol bound to ticket records
pub type TicketService<'a> = ResourceService<'a, TicketRepository<'a>>;

impl ResourceService<'_, TicketRepository<'_>> {
    /// Lists every ticket joined with the labels of the records it references
    ///
    /// # Returns
    /// - `Ok(Vec<TicketSummaryDto>)` - One summary per ticket ordered by ID
    /// - `Err(Error::InternalError)` - A ticket references a record that no longer exists
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn list_summaries(&self) -> Result<Vec<TicketSummaryDto>, Error> {
        let tickets = self.store().find_all_with_references().await?;

        tickets.into_iter().map(summarize).collect()
    }
}

fn summarize(entry: TicketWithReferences) -> Result<TicketSummaryDto, Error> {
    let TicketWithReferences {
        ticket,
        booking,
        flight,
        passenger,
        travel_class,
    } = entry;

    let missing = |kind: ResourceKind| {
        Error::InternalError(format!(
            "Ticket {} references a {} which does not exist",
            ticket.id,
            kind.label()
        ))
    };

    let booking = booking.ok_or_else(|| missing(ResourceKind::Booking))?;
    let flight = flight.ok_or_else(|| missing(ResourceKind::Flight))?;
    let passenger = passenger.ok_or_else(|| missing(ResourceKind::Passenger))?;
    let travel_class = travel_class.ok_or_else(|| missing(ResourceKind::TravelClass))?;

    Ok(TicketSummaryDto {
        id: ticket.id,
        seat_number: ticket.seat_number,
        price: format_amount(ticket.price),
        booking_ref: booking.booking_reference,
        flight_number: flight.flight_number,
        passenger_name: format!("{} {}", passenger.first_name, passenger.last_name),
        travel_class: travel_class.name,
    })
}
