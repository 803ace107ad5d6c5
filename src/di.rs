use crate::{
    abstract_trait::{
        DynHashing, DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
        DynOrderQueryService, DynProductCommandRepository, DynProductCommandService,
        DynProductQueryRepository, DynProductQueryService, DynUserCommandRepository,
        DynUserCommandService, DynUserQueryRepository, DynUserQueryService,
    },
    config::{ConnectionPool, Hashing},
    repository::{
        order::{OrderCommandRepository, OrderQueryRepository},
        product::{ProductCommandRepository, ProductQueryRepository},
        user::{UserCommandRepository, UserQueryRepository},
    },
    service::{
        order::{OrderCommandService, OrderQueryService},
        product::{ProductCommandService, ProductQueryService},
        user::{UserCommandService, UserQueryService},
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub user_query: DynUserQueryService,
    pub user_command: DynUserCommandService,
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("user_query", &"DynUserQueryService")
            .field("user_command", &"DynUserCommandService")
            .field("order_query", &"DynOrderQueryService")
            .field("order_command", &"DynOrderCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let product_query_repo: DynProductQueryRepository =
            Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo: DynProductCommandRepository =
            Arc::new(ProductCommandRepository::new(pool.clone()));
        let user_query_repo: DynUserQueryRepository =
            Arc::new(UserQueryRepository::new(pool.clone()));
        let user_command_repo: DynUserCommandRepository =
            Arc::new(UserCommandRepository::new(pool.clone()));
        let order_query_repo: DynOrderQueryRepository =
            Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command_repo: DynOrderCommandRepository =
            Arc::new(OrderCommandRepository::new(pool));

        let hashing: DynHashing = Arc::new(Hashing::new());

        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(product_query_repo));
        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            product_command_repo,
            order_query_repo.clone(),
        ));

        let user_query: DynUserQueryService = Arc::new(UserQueryService::new(user_query_repo));
        let user_command: DynUserCommandService = Arc::new(UserCommandService::new(
            user_command_repo,
            order_query_repo.clone(),
            hashing,
        ));

        let order_query: DynOrderQueryService = Arc::new(OrderQueryService::new(order_query_repo));
        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(order_command_repo));

        Self {
            product_query,
            product_command,
            user_query,
            user_command,
            order_query,
            order_command,
        }
    }
}
