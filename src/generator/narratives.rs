//! Canned narratives returned by the mock generator

pub const BUDGET_SUMMARY: &str = r#"Based on your financial information, here's your personalized budget summary:

**Financial Overview:**
Your monthly income provides a solid foundation for your financial goals. After analyzing your spending patterns, I can see opportunities for optimization.

**Key Insights:**
- Your largest expense categories are housing and transportation
- You have room to increase your savings rate
- Consider automating your savings to reach your goals faster

**Recommendations:**
1. Set up automatic transfers to savings
2. Review subscription services for potential cuts
3. Consider the 50/30/20 budgeting rule
4. Track expenses for better awareness

**Next Steps:**
Focus on building your emergency fund first, then work toward your other financial goals."#;

pub const SPENDING_INSIGHTS: &str = r#"**Spending Analysis & Insights:**

**1. Spending Breakdown:**
• Fixed Expenses: 65% of income
• Variable Expenses: 25% of income
• Savings: 10% of income

**2. Category Analysis:**
• Housing: 35% (within recommended range)
• Transportation: 15% (consider carpooling options)
• Food: 12% (meal planning could reduce this)
• Entertainment: 8% (reasonable for lifestyle balance)

**3. Optimization Opportunities:**
• Reduce dining out by 20% to save $200/month
• Negotiate insurance rates for potential savings
• Consider switching to a high-yield savings account

**4. Goal Progress:**
At your current savings rate, you're on track to meet your emergency fund goal in 8 months.

**5. Recommendations:**
• Automate savings transfers
• Use budgeting apps for tracking
• Review and adjust monthly

**6. Risk Factors:**
Your current spending is sustainable, but building a larger emergency fund should be prioritized."#;

pub const FINANCIAL_QUESTION: &str = r#"Here's my advice for your financial question:

**Understanding Your Situation:**
Managing finances while dealing with student loans requires a strategic approach that balances debt repayment with building financial security.

**Practical Steps:**
1. **Create a minimal emergency fund** - Start with $500-1000 while paying loans
2. **Use the debt avalanche method** - Pay minimums on all loans, extra on highest interest rate
3. **Look for additional income** - Side hustles, freelancing, or part-time work
4. **Reduce unnecessary expenses** - Review subscriptions, dining out, entertainment
5. **Take advantage of tax benefits** - Student loan interest deduction

**Saving Strategies:**
• Automate small savings amounts ($25-50/month)
• Use cash-back apps and rewards programs
• Consider income-driven repayment plans if federal loans
• Look into loan forgiveness programs if eligible

**Long-term Approach:**
Focus on building good financial habits now. Even small amounts saved consistently will compound over time."#;

pub const GENERAL_GUIDANCE: &str = r#"Thank you for your question. As your personal finance assistant, I'm here to help you make informed financial decisions.

**General Financial Guidance:**
• Start with a budget to understand your money flow
• Build an emergency fund of 3-6 months expenses
• Pay off high-interest debt first
• Invest for long-term goals
• Review and adjust your plan regularly

**Next Steps:**
Feel free to ask specific questions about budgeting, saving, debt management, or investment planning. I can also help analyze your spending patterns if you provide your financial information.

**Remember:**
Personal finance is personal - what works for others may need adjustment for your unique situation."#;
