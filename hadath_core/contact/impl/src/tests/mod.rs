use hadath_core_contact_contracts::validate::MockContactValidateService;
use hadath_extern_contracts::contact_messages::MockContactMessagesApiService;

use crate::ContactFeatureServiceImpl;

mod validate;

type Sut = ContactFeatureServiceImpl<MockContactValidateService, MockContactMessagesApiService>;
