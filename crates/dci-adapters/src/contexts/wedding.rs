use std::cell::RefCell;
use std::rc::Rc;

use dci_core::{share, Context, DciError, Enactment};
use dci_domain::Person;
use serde::Serialize;

use crate::roles::{HusbandToBe, Minister, WifeToBe};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeddingOutcome {
    pub pronouncement: String,
    pub husband: String,
    pub wife: String,
}

/// Boda tradicional: la novia adopta el apellido del novio.
///
/// El contexto crea y posee a las tres personas (`husband`, `wife` y el
/// derivado `minister`); los roles sólo guardan referencias débiles a ellas.
pub struct TraditionalWedding {
    ctx: Context,
    man: Rc<RefCell<Person>>,
    woman: Rc<RefCell<Person>>,
    _minister: Rc<RefCell<Person>>,
}

impl TraditionalWedding {
    pub fn new(man: (&str, &str), woman: (&str, &str), minister: (&str, &str)) -> Result<Self, DciError> {
        let man = share(Person::new(man.0, man.1));
        let woman = share(Person::new(woman.0, woman.1));
        let minister = share(Person::new(minister.0, minister.1));

        let ctx = Context::new("TraditionalWedding");
        ctx.role_as::<HusbandToBe>("husband", man.clone())?;
        ctx.role_as::<WifeToBe>("wife", woman.clone())?;
        ctx.role::<Minister>(minister.clone())?;
        Ok(Self { ctx, man, woman, _minister: minister })
    }

    pub fn husband(&self) -> String {
        self.man.borrow().full_name()
    }

    pub fn wife(&self) -> String {
        self.woman.borrow().full_name()
    }
}

impl Enactment for TraditionalWedding {
    type Output = WeddingOutcome;

    fn context(&self) -> &Context {
        &self.ctx
    }

    fn call(&self) -> Result<WeddingOutcome, DciError> {
        let pronouncement: String = self.ctx.get("minister")?.call("administer_marriage", &[])?;
        Ok(WeddingOutcome { pronouncement,
                            husband: self.husband(),
                            wife: self.wife() })
    }
}
