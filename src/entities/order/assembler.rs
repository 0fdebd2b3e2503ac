//! Order representation assembler

use super::model::{Order, OrderAction};
use crate::core::Entity;
use crate::core::hal::{CollectionModel, EntityModel, LinkBuilder, Links, ModelAssembler, SELF_REL};

/// Projects orders into HAL models.
///
/// Every order links to itself and to the collection. Orders still
/// `IN_PROGRESS` also carry `cancel` and `complete` links; terminal orders
/// don't, since neither action is valid any more.
#[derive(Debug, Clone)]
pub struct OrderModelAssembler {
    links: LinkBuilder,
}

impl OrderModelAssembler {
    pub fn new(links: LinkBuilder) -> Self {
        Self { links }
    }

    fn collection_links(&self) -> Links {
        Links::new().with(SELF_REL, self.links.link([Order::resource_name()]))
    }
}

impl ModelAssembler<Order> for OrderModelAssembler {
    fn to_model(&self, order: Order) -> EntityModel<Order> {
        let mut links = Links::new();

        if let Some(id) = order.id {
            let id = id.to_string();
            links = links.with(
                SELF_REL,
                self.links.link([Order::resource_name(), id.as_str()]),
            );
            links = links.with(Order::resource_name(), self.links.link([Order::resource_name()]));

            for action in OrderAction::permitted(order.status) {
                links = links.with(
                    action.rel(),
                    self.links
                        .link([Order::resource_name(), id.as_str(), action.rel()]),
                );
            }
        }

        EntityModel::new(order, links)
    }

    fn to_collection_model(&self, orders: Vec<Order>) -> CollectionModel<Order> {
        let models = orders.into_iter().map(|o| self.to_model(o)).collect();
        CollectionModel::new(
            Order::resource_name_singular(),
            models,
            self.collection_links(),
        )
    }
}
