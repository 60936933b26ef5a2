use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};

use crate::modules::events::core::draft::EventDraft;
use crate::modules::events::use_cases::manage_events::handler::Transition;
use crate::shell::state::AppState;

#[derive(InputObject, Default)]
pub struct EventDraftInput {
    pub title: String,
    pub date: String,
    pub time: String,
    #[graphql(default)]
    pub location: String,
    #[graphql(default)]
    pub description: String,
    pub category: String,
    pub organizer_name: String,
    pub contact_number: String,
    pub people_attending: Option<i64>,
}

impl From<EventDraftInput> for EventDraft {
    fn from(input: EventDraftInput) -> Self {
        Self {
            title: input.title,
            date: input.date,
            time: input.time,
            location: input.location,
            description: input.description,
            category: input.category,
            organizer_name: input.organizer_name,
            contact_number: input.contact_number,
            people_attending: input.people_attending,
        }
    }
}

fn gql_error(e: impl std::fmt::Display) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

async fn transition(context: &Context<'_>, id: ID, transition: Transition) -> GqlResult<ID> {
    let state = context.data_unchecked::<AppState>();
    let seen = state.feed.revision().await;
    let applied = state
        .mutator
        .transition(&id, transition)
        .await
        .map_err(gql_error)?;
    state.feed.apply_local(seen, &applied).await;
    Ok(ID(applied.id))
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_event(&self, context: &Context<'_>, input: EventDraftInput) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let draft = EventDraft::from(input);
        let id = state.mutator.create(&draft).await.map_err(gql_error)?;
        Ok(ID(id))
    }

    async fn check_in(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        transition(context, id, Transition::CheckIn).await
    }

    async fn check_out(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        transition(context, id, Transition::CheckOut).await
    }

    async fn cancel_event(&self, context: &Context<'_>, id: ID) -> GqlResult<ID> {
        transition(context, id, Transition::Cancel).await
    }

    async fn edit_attendee_count(
        &self,
        context: &Context<'_>,
        id: ID,
        count: i64,
    ) -> GqlResult<ID> {
        transition(context, id, Transition::EditAttendeeCount(count)).await
    }

    async fn delete_event(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        state.mutator.delete(&id).await.map_err(gql_error)?;
        Ok(true)
    }
}
