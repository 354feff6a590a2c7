use error_stack::Report;
use rand::seq::SliceRandom;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnMembershipQuery, DependOnUserQuery, MembershipQuery, UserQuery,
};
use kernel::interface::update::{DependOnMembershipModifier, MembershipModifier};
use kernel::prelude::entity::{Membership, MembershipId, MembershipTier, UserId};
use kernel::KernelError;

use crate::transfer::MembershipDto;

#[async_trait::async_trait]
pub trait MembershipService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnUserQuery
    + DependOnMembershipQuery
    + DependOnMembershipModifier
{
    /// Enrolls the user at a randomly drawn tier. One membership per user.
    async fn register_membership(
        &self,
        user_id: Uuid,
    ) -> error_stack::Result<MembershipDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user_id = UserId::new(user_id);
        let user = self
            .user_query()
            .find_by_id(&mut con, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;
        if self
            .membership_query()
            .find_by_user_id(&mut con, &user_id)
            .await?
            .is_some()
        {
            return Err(Report::new(KernelError::AlreadyExists)
                .attach_printable("user already has a membership registered"));
        }

        let tier = [
            MembershipTier::Silver,
            MembershipTier::Gold,
            MembershipTier::Platinum,
        ]
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(MembershipTier::Silver);
        let membership = Membership::new(MembershipId::new(Uuid::new_v4()), user_id, tier);
        self.membership_modifier()
            .create(&mut con, &membership)
            .await?;
        con.commit().await?;

        Ok(MembershipDto::from_membership(
            membership,
            user.email().as_ref().clone(),
        ))
    }

    async fn get_membership(
        &self,
        user_id: Uuid,
    ) -> error_stack::Result<MembershipDto, KernelError> {
        let mut con = self.database_connection().transact().await?;

        let user_id = UserId::new(user_id);
        let user = self
            .user_query()
            .find_by_id(&mut con, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound).attach_printable("user not found")
            })?;
        let membership = self
            .membership_query()
            .find_by_user_id(&mut con, &user_id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable("no membership found, register for a membership first")
            })?;

        Ok(MembershipDto::from_membership(
            membership,
            user.email().as_ref().clone(),
        ))
    }
}

impl<T> MembershipService for T where
    T: DependOnDatabaseConnection
        + DependOnUserQuery
        + DependOnMembershipQuery
        + DependOnMembershipModifier
{
}
